/**
 * Refresh Handler
 *
 * This module implements session renewal for POST /auth/refresh.
 *
 * A refresh token is redeemable exactly once: the handler returns a fresh
 * access/refresh pair and the presented token stops working, even when
 * several requests race on it.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{RefreshRequest, TokenPairResponse};
use crate::auth::service::AuthService;
use crate::error::ApiError;

/// Refresh handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `Json(request)` - Body carrying the raw refresh token
///
/// # Returns
///
/// `200 OK` with a new `{ "accessToken": ..., "refreshToken": ... }` pair
///
/// # Errors
///
/// * `401 Unauthorized` - token invalid, expired, wrong type, already
///   redeemed, or its subject no longer exists; indistinguishably
pub async fn refresh(
    State(auth): State<AuthService>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let pair = auth.refresh(&request.refresh_token).await?;
    Ok(Json(pair.into()))
}
