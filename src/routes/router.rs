/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Note routes, wrapped by the bearer authentication middleware
 * 2. Authentication routes (public)
 * 3. Fallback handler (404)
 *
 * A CORS layer over the whole router admits browser and desktop clients
 * calling from other origins.
 */

use std::time::Duration;

use axum::http::{header, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::auth::require_auth;
use crate::notes::{delete_note, list_notes, save_note};
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Authentication Routes (public)
///
/// - `POST /auth/register` - User registration (201, no body)
/// - `POST /auth/login` - User login (token pair)
/// - `POST /auth/refresh` - Refresh token rotation (token pair)
///
/// ## Note Routes (bearer access token required)
///
/// - `POST /notes` - Create or overwrite a note
/// - `GET /notes` - List the caller's notes
/// - `DELETE /notes/{id}` - Delete one of the caller's notes
///
/// ## Fallback
///
/// Unknown routes return 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    // Note routes sit behind the bearer gate
    let note_routes = Router::new()
        .route(
            "/notes",
            axum::routing::post(save_note).get(list_notes),
        )
        .route("/notes/{id}", axum::routing::delete(delete_note))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    let router = Router::new().merge(note_routes);

    // Add public authentication routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // CORS: bearer clients connect from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    // Use AppState as router state
    router.with_state(app_state).layer(cors)
}
