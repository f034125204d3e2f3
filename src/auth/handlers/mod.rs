//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints, organized into focused
//! submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types, boundary validation
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── refresh.rs  - Session renewal handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - Create an account (201, no body)
//! - **`login`** - POST /auth/login - Authenticate, returns a token pair
//! - **`refresh`** - POST /auth/refresh - Rotate a refresh token

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Refresh handler
pub mod refresh;

// Re-export commonly used types
pub use types::{LoginRequest, RefreshRequest, RegisterRequest, TokenPairResponse};

// Re-export handlers
pub use login::login;
pub use refresh::refresh;
pub use register::register;
