//! Storage Module
//!
//! This module defines the persistence boundary of the backend: the record
//! types, the store traits the services are written against, and the two
//! backends that implement them.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs             - Store traits' shared error type and exports
//! ├── users.rs           - User record and UserStore trait
//! ├── refresh_tokens.rs  - Refresh token record, digest helper, store trait
//! ├── notes.rs           - Note record and NoteStore trait
//! ├── postgres.rs        - sqlx/Postgres implementations
//! └── memory.rs          - Mutex<HashMap> implementations (test suite)
//! ```
//!
//! Services receive stores as `Arc<dyn …>` so the Postgres and in-memory
//! backends are interchangeable behind the same contracts.

use thiserror::Error;

/// User record and store contract
pub mod users;

/// Refresh token record, digest helper, and store contract
pub mod refresh_tokens;

/// Note record and store contract
pub mod notes;

/// Postgres-backed store implementations
pub mod postgres;

/// In-memory store implementations
pub mod memory;

pub use notes::{Note, NoteStore};
pub use refresh_tokens::{hash_refresh_token, RefreshTokenRecord, RefreshTokenStore};
pub use users::{User, UserStore};

/// Errors surfaced by store backends.
///
/// `Conflict` is reserved for uniqueness violations (duplicate user email,
/// duplicate refresh-token key); everything else is an opaque backend
/// failure that callers treat as unexpected.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same unique key already exists
    #[error("a conflicting record already exists")]
    Conflict,

    /// Backend failure (connection, query, serialization)
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Conflict;
            }
        }
        StoreError::Backend(err.to_string())
    }
}
