//! Notewell - Main Library
//!
//! Notewell is a note-taking backend: account registration, login with
//! rotating refresh tokens, and per-user CRUD over small text notes,
//! served over HTTP with axum and persisted in Postgres via sqlx.
//!
//! # Module Structure
//!
//! - **`auth`** - password hashing, the token codec, and the
//!   register/login/refresh flows with their HTTP handlers
//! - **`notes`** - ownership-scoped note operations and handlers
//! - **`store`** - record types, store traits, and the Postgres and
//!   in-memory backends
//! - **`middleware`** - the bearer authentication gate
//! - **`error`** - the domain error taxonomy and its HTTP translation
//! - **`routes`** - router assembly
//! - **`server`** - configuration, application state, startup
//!
//! # Session Model
//!
//! Login issues a short-lived access token and a long-lived refresh token.
//! Only a SHA-256 digest of the refresh token is stored; redeeming it at
//! `/auth/refresh` atomically deletes the digest and issues a new pair, so
//! each refresh token works exactly once.
//!
//! # Usage
//!
//! ```rust,no_run
//! use notewell::server::config::Config;
//! use notewell::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Authentication: hashing, tokens, flows, handlers
pub mod auth;

/// Domain error taxonomy and HTTP translation
pub mod error;

/// Request middleware
pub mod middleware;

/// Note operations and handlers
pub mod notes;

/// Router assembly
pub mod routes;

/// Configuration, state, and startup
pub mod server;

/// Records, store traits, and backends
pub mod store;
