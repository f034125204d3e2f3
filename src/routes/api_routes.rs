/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints into the router.
 *
 * # Routes
 *
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `POST /auth/refresh` - Refresh token rotation
 *
 * All three are public: registration and login by nature, refresh because
 * the refresh token in the body is itself the credential.
 */

use axum::Router;

use crate::auth::{login, refresh, register};
use crate::server::state::AppState;

/// Configure authentication routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the authentication routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/auth/refresh", axum::routing::post(refresh))
}
