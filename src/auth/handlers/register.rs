/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the payload (email shape, password policy)
 * 2. Hand off to the auth service (duplicate check, hash, persist)
 * 3. Return 201 Created with an empty body
 *
 * # Security
 *
 * - Passwords are bcrypt-hashed before storage and never logged
 * - No tokens are issued at registration; clients log in explicitly
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::service::AuthService;
use crate::error::ApiError;

/// Registration handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `Json(request)` - Registration request containing email and password
///
/// # Returns
///
/// `201 Created` with no body on success
///
/// # Errors
///
/// * `400 Bad Request` - payload failed validation (per-field messages)
/// * `409 Conflict` - an account with this email already exists
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "Sufficient1Pw"
/// }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    let errors = request.validate();
    if !errors.is_empty() {
        tracing::warn!("registration payload failed validation");
        return Err(ApiError::validation(errors));
    }

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    auth.register(&email, &password).await?;

    Ok(StatusCode::CREATED)
}
