/**
 * In-Memory Store Implementations
 *
 * HashMap-backed implementations of the store traits behind a std Mutex.
 * These back the test suite; they uphold the same contracts as the Postgres
 * stores, including the duplicate-email conflict and the at-most-once
 * conditional delete for refresh tokens.
 */

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::notes::{Note, NoteStore};
use super::refresh_tokens::{RefreshTokenRecord, RefreshTokenStore};
use super::users::{User, UserStore};
use super::StoreError;

/// User store over a process-local map
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict);
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }
}

/// Refresh token store over a process-local map.
///
/// Records are keyed by (owner_id, token_hash) so the conditional delete is
/// a single keyed `remove` under the lock.
#[derive(Debug, Default)]
pub struct InMemoryRefreshTokenStore {
    records: Mutex<HashMap<(Uuid, String), RefreshTokenRecord>>,
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn put(
        &self,
        owner_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let record = RefreshTokenRecord {
            owner_id,
            token_hash: token_hash.to_string(),
            expires_at,
            created_at: Utc::now(),
        };
        let mut records = self.records.lock().unwrap();
        records.insert((owner_id, token_hash.to_string()), record);
        Ok(())
    }

    async fn find_by_owner_and_hash(
        &self,
        owner_id: Uuid,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.get(&(owner_id, token_hash.to_string())).cloned())
    }

    async fn delete_by_owner_and_hash(
        &self,
        owner_id: Uuid,
        token_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.lock().unwrap();
        Ok(records.remove(&(owner_id, token_hash.to_string())).is_some())
    }
}

/// Note store over a process-local map
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: Mutex<HashMap<Uuid, Note>>,
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn upsert(&self, note: &Note) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().unwrap();
        notes.insert(note.id, note.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .values()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().unwrap();
        notes.remove(&id);
        Ok(())
    }
}
