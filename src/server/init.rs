/**
 * Server Initialization
 *
 * This module assembles the running application: database pool, embedded
 * migrations, stores, services, state, and router.
 *
 * # Initialization Steps
 *
 * 1. Connect the Postgres pool from the configured URL
 * 2. Run embedded migrations
 * 3. Build the Postgres-backed stores
 * 4. Build the token codec and password hasher from configuration
 * 5. Assemble `AppState` and the router
 *
 * Unlike configuration of the listen port, none of this is optional: a
 * failed connection or migration aborts startup.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::password::PasswordHasher;
use crate::auth::tokens::TokenCodec;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::store::postgres::{PgNoteStore, PgRefreshTokenStore, PgUserStore};

/// Why the server could not start
#[derive(Debug, Error)]
pub enum StartupError {
    /// Database connection failed
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migrations failed to apply
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application.
///
/// # Errors
///
/// [`StartupError`] if the database is unreachable or migrations fail;
/// the process must not serve requests in either case.
pub async fn create_app(config: &Config) -> Result<Router, StartupError> {
    tracing::info!("initializing notewell backend server");

    // Step 1: connect the pool
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    // Step 2: run embedded migrations
    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    // Step 3: build state over the Postgres stores
    let state = AppState::new(
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgRefreshTokenStore::new(pool.clone())),
        Arc::new(PgNoteStore::new(pool)),
        PasswordHasher::new(),
        TokenCodec::new(
            &config.signing_secret,
            config.access_token_ttl_ms,
            config.refresh_token_ttl_ms,
        ),
    );

    // Step 4: create router with all routes
    let app = create_router(state);
    tracing::info!("router configured");

    Ok(app)
}
