/**
 * API Error Types
 *
 * This module defines the domain error taxonomy for the backend. Failures
 * are raised as values at the service boundary and converted to HTTP
 * responses exactly once, in `conversion.rs`.
 *
 * # Error Taxonomy
 *
 * - `DuplicateIdentity` - registration with an email that is already taken
 * - `InvalidCredentials` - login failure (unknown email and bad password
 *   share this variant so responses cannot be told apart)
 * - `InvalidToken` - token failure (signature, expiry, type mismatch, or an
 *   already-redeemed refresh token; all indistinguishable)
 * - `NotFound` - a referenced record does not exist
 * - `Forbidden` - the caller does not own the referenced record
 * - `Validation` - malformed input, carries per-field messages
 * - `Unexpected` - internal failure; logged, returned opaque
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain errors surfaced by the services and handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A user with this email already exists
    #[error("an account with this email already exists")]
    DuplicateIdentity,

    /// Login failed; deliberately silent about which check failed
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Token failed verification or redemption
    #[error("invalid or expired token")]
    InvalidToken,

    /// Referenced record does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Caller is authenticated but not allowed to touch this record
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Request body failed boundary validation
    #[error("validation failed")]
    Validation {
        /// Per-field failure messages
        errors: Vec<FieldError>,
    },

    /// Internal failure; details are logged, never returned
    #[error("internal error: {message}")]
    Unexpected {
        /// Internal diagnostic message (not sent to clients)
        message: String,
    },
}

impl ApiError {
    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a validation error from field-level failures
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Create an unexpected (internal) error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateIdentity` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `InvalidToken` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Forbidden` - 403 Forbidden
    /// - `Validation` - 400 Bad Request
    /// - `Unexpected` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateIdentity => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// `Unexpected` returns a fixed opaque message; its internal details
    /// stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Unexpected { .. } => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    /// Store failures outside an explicitly handled context are internal
    /// errors. Call sites that expect `Conflict` (user insert) match on it
    /// before this conversion applies.
    fn from(err: StoreError) -> Self {
        Self::Unexpected {
            message: err.to_string(),
        }
    }
}
