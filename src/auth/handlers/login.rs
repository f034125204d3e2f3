/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /auth/login.
 *
 * # Security
 *
 * - Unknown email and wrong password produce identical 401 responses
 * - Only the refresh token's digest is persisted server-side
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenPairResponse};
use crate::auth::service::AuthService;
use crate::error::ApiError;

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with `{ "accessToken": ..., "refreshToken": ... }`
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password, identically
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let pair = auth.login(&request.email, &request.password).await?;
    Ok(Json(pair.into()))
}
