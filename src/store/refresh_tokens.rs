/**
 * Refresh Token Record and Store Contract
 *
 * Refresh tokens are persisted as SHA-256 digests, never raw. A record is
 * keyed by (owner_id, token_hash); redeeming a token deletes its record, so
 * a raw refresh token can be used at most once.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::StoreError;

/// Hash a raw refresh token for storage and lookup.
///
/// Deterministic SHA-256, hex-encoded. The deliberately slow salted
/// password hasher is not used for tokens; lookups need the same input to
/// produce the same digest.
pub fn hash_refresh_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Stored form of an issued refresh token
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    /// Owner (user) id the token was issued to
    pub owner_id: Uuid,
    /// SHA-256 hex digest of the raw token
    pub token_hash: String,
    /// Expiry instant mirrored from the token's claims
    pub expires_at: DateTime<Utc>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Store operations for refresh token records.
///
/// `delete_by_owner_and_hash` is the rotation gate: it must be an atomic
/// conditional delete that succeeds for at most one caller per stored
/// record, returning whether a record was actually removed.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a record for a newly issued refresh token
    async fn put(
        &self,
        owner_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Look up the record matching an owner and token digest
    async fn find_by_owner_and_hash(
        &self,
        owner_id: Uuid,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, StoreError>;

    /// Atomically delete the matching record, reporting whether one existed
    async fn delete_by_owner_and_hash(
        &self,
        owner_id: Uuid,
        token_hash: &str,
    ) -> Result<bool, StoreError>;
}
