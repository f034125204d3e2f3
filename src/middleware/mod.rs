//! Middleware Module
//!
//! Request middleware for the HTTP layer. Currently just the bearer
//! authentication gate that fronts the note routes.

/// Bearer token authentication middleware and extractor
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
