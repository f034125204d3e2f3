/**
 * Note Access Control
 *
 * Ownership rules over the note store. Reads and deletes are scoped to the
 * caller; a delete on someone else's note is refused after confirming the
 * note exists (absent beats foreign: 404 before 403).
 *
 * Saving is a keyed upsert: a payload without an id creates a fresh note,
 * a payload with an id overwrites whatever record holds that id, with the
 * owner set to the caller and the created-at stamp refreshed. There is no
 * prior-ownership check on the overwrite path.
 */

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::store::{Note, NoteStore};

/// Incoming note payload, already validated at the boundary
#[derive(Debug, Clone)]
pub struct NoteDraft {
    /// Existing note id to overwrite, or `None` to create
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub color: i32,
}

/// Ownership-scoped note operations
#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }

    /// Create a note, or overwrite the record with the draft's id.
    ///
    /// The persisted note is always owned by the caller and carries a fresh
    /// created-at stamp, whatever the previous record said.
    pub async fn create_or_update(
        &self,
        draft: NoteDraft,
        caller_id: Uuid,
    ) -> Result<Note, ApiError> {
        let note = Note {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            title: draft.title,
            content: draft.content,
            color: draft.color,
            created_at: Utc::now(),
            owner_id: caller_id,
        };

        self.notes.upsert(&note).await?;
        tracing::info!(note_id = %note.id, owner_id = %caller_id, "note saved");
        Ok(note)
    }

    /// All notes owned by the caller, in store-native order.
    pub async fn list_by_owner(&self, caller_id: Uuid) -> Result<Vec<Note>, ApiError> {
        Ok(self.notes.list_by_owner(caller_id).await?)
    }

    /// Delete a note the caller owns.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no note has this id
    /// * `Forbidden` - the note exists but belongs to someone else; the
    ///   record is left untouched
    pub async fn delete(&self, note_id: Uuid, caller_id: Uuid) -> Result<(), ApiError> {
        let note = self
            .notes
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| ApiError::not_found("note not found"))?;

        if note.owner_id != caller_id {
            tracing::warn!(note_id = %note_id, caller_id = %caller_id, "note delete denied");
            return Err(ApiError::forbidden("note belongs to another user"));
        }

        self.notes.delete_by_id(note_id).await?;
        tracing::info!(note_id = %note_id, "note deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryNoteStore;
    use pretty_assertions::assert_eq;

    fn service() -> NoteService {
        NoteService::new(Arc::new(InMemoryNoteStore::default()))
    }

    fn draft(id: Option<Uuid>) -> NoteDraft {
        NoteDraft {
            id,
            title: "groceries".to_string(),
            content: "eggs, flour".to_string(),
            color: 3,
        }
    }

    #[tokio::test]
    async fn create_without_id_generates_one() {
        let notes = service();
        let caller = Uuid::new_v4();

        let note = notes.create_or_update(draft(None), caller).await.unwrap();
        assert_eq!(note.owner_id, caller);
        assert_eq!(note.title, "groceries");

        let listed = notes.list_by_owner(caller).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, note.id);
    }

    #[tokio::test]
    async fn update_with_id_overwrites_in_place() {
        let notes = service();
        let caller = Uuid::new_v4();
        let original = notes.create_or_update(draft(None), caller).await.unwrap();

        let mut updated = draft(Some(original.id));
        updated.title = "groceries v2".to_string();
        let saved = notes.create_or_update(updated, caller).await.unwrap();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.title, "groceries v2");
        assert!(saved.created_at >= original.created_at);

        let listed = notes.list_by_owner(caller).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn update_with_foreign_id_reassigns_owner() {
        let notes = service();
        let original_owner = Uuid::new_v4();
        let other_caller = Uuid::new_v4();
        let note = notes
            .create_or_update(draft(None), original_owner)
            .await
            .unwrap();

        // Overwrite by id from a different caller: the record changes hands.
        let taken = notes
            .create_or_update(draft(Some(note.id)), other_caller)
            .await
            .unwrap();
        assert_eq!(taken.id, note.id);
        assert_eq!(taken.owner_id, other_caller);

        assert!(notes.list_by_owner(original_owner).await.unwrap().is_empty());
        assert_eq!(notes.list_by_owner(other_caller).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner() {
        let notes = service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        notes.create_or_update(draft(None), alice).await.unwrap();
        notes.create_or_update(draft(None), alice).await.unwrap();
        notes.create_or_update(draft(None), bob).await.unwrap();

        assert_eq!(notes.list_by_owner(alice).await.unwrap().len(), 2);
        assert_eq!(notes.list_by_owner(bob).await.unwrap().len(), 1);
        assert!(notes
            .list_by_owner(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn delete_missing_note_is_not_found() {
        let notes = service();
        let err = notes
            .delete(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_foreign_note_is_forbidden_and_keeps_it() {
        let notes = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let note = notes.create_or_update(draft(None), owner).await.unwrap();

        let err = notes.delete(note.id, stranger).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }));

        // Still there for the owner.
        assert_eq!(notes.list_by_owner(owner).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_own_note_removes_it() {
        let notes = service();
        let owner = Uuid::new_v4();
        let note = notes.create_or_update(draft(None), owner).await.unwrap();

        notes.delete(note.id, owner).await.unwrap();
        assert!(notes.list_by_owner(owner).await.unwrap().is_empty());

        let err = notes.delete(note.id, owner).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
