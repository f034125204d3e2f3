//! Error Module
//!
//! Domain error taxonomy and its HTTP translation.
//!
//! - **`types`** - the `ApiError` enum and field-level validation errors
//! - **`conversion`** - `IntoResponse` so handlers can return
//!   `Result<_, ApiError>` directly

/// Error type definitions
pub mod types;

/// Conversion from errors to HTTP responses
pub mod conversion;

pub use types::{ApiError, FieldError};
