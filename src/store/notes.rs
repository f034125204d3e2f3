/**
 * Note Record and Store Contract
 *
 * Notes belong to exactly one owner. The store exposes keyed upsert,
 * lookup, owner-scoped listing, and delete; ownership decisions live in the
 * note service, not here.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

/// Note record as persisted by the note store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    /// Unique note ID (UUID)
    pub id: Uuid,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Display color (client-defined integer)
    pub color: i32,
    /// Created at timestamp (refreshed on every upsert)
    pub created_at: DateTime<Utc>,
    /// Owning user's id
    pub owner_id: Uuid,
}

/// Store operations for note records.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert the note, or overwrite the record with the same id
    async fn upsert(&self, note: &Note) -> Result<(), StoreError>;

    /// Look up a note by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError>;

    /// All notes owned by the given user, in store-native order
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError>;

    /// Delete a note by id (no-op if already gone)
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}
