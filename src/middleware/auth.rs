/**
 * Authentication Middleware
 *
 * Bearer gate for the note routes. Extracts the access token from the
 * Authorization header, verifies it (signature, expiry, access type),
 * confirms the subject still resolves to a user, and attaches the caller
 * to request extensions for handlers to extract.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenType;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated caller attached to request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it as an access token (a refresh token is refused here)
/// 3. Confirms the subject still exists in the user store
/// 4. Attaches [`AuthenticatedUser`] to request extensions
///
/// Every rejection is the uniform 401 `InvalidToken` response.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::InvalidToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        ApiError::InvalidToken
    })?;

    let user_id = state
        .tokens
        .verify(token, TokenType::Access)
        .map_err(|err| {
            tracing::warn!("access token rejected: {}", err);
            ApiError::InvalidToken
        })?;

    // The token may outlive its account; re-check the subject.
    let user = state.users.find_by_id(user_id).await?;
    if user.is_none() {
        tracing::warn!("access token subject no longer exists");
        return Err(ApiError::InvalidToken);
    }

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Handlers behind [`require_auth`] take this as a parameter to receive
/// the caller set by the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::InvalidToken
            })?;

        Ok(AuthUser(user))
    }
}
