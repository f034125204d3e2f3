/**
 * User Record and Store Contract
 *
 * The user record as persisted, plus the store operations the auth flows
 * depend on. Lookup by email is exact: the stored value is whatever
 * registration persisted (trimmed), and no normalization happens here.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

/// User record as persisted by the user store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Email address (unique, stored as registered)
    pub email: String,
    /// Hashed password (bcrypt digest, opaque)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new record with a fresh id and the current timestamp.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

/// Store operations for user records.
///
/// `insert` must reject a duplicate email with [`StoreError::Conflict`] so
/// registration stays safe under concurrent duplicate attempts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user record
    async fn insert(&self, user: User) -> Result<(), StoreError>;

    /// Look up a user by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}
