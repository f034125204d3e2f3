/**
 * Note Handlers
 *
 * HTTP handlers for the authenticated note endpoints. All three run behind
 * the bearer middleware; the `AuthUser` extractor supplies the caller.
 *
 * # Endpoints
 *
 * - POST /notes - create a note, or overwrite one by id
 * - GET /notes - list the caller's notes
 * - DELETE /notes/{id} - delete one of the caller's notes
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, FieldError};
use crate::middleware::auth::AuthUser;
use crate::notes::service::{NoteDraft, NoteService};
use crate::store::Note;

/// Note payload for create-or-update
#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    /// Existing note id to overwrite; omit to create
    pub id: Option<Uuid>,
    /// Note title (required, not blank)
    pub title: Option<String>,
    /// Note body (required)
    pub content: Option<String>,
    /// Display color (required)
    pub color: Option<i32>,
}

impl NoteRequest {
    /// Check the payload against the boundary rules.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match self.title.as_deref().map(str::trim) {
            None | Some("") => errors.push(FieldError::new("title", "title is required")),
            Some(_) => {}
        }
        if self.content.is_none() {
            errors.push(FieldError::new("content", "content is required"));
        }
        if self.color.is_none() {
            errors.push(FieldError::new("color", "color is required"));
        }

        errors
    }

    fn into_draft(self) -> NoteDraft {
        NoteDraft {
            id: self.id,
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
        }
    }
}

/// Public view of a note; the owner id stays server-side
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub color: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            color: note.color,
            created_at: note.created_at,
        }
    }
}

/// Create-or-update handler
///
/// # Returns
///
/// `201 Created` with the persisted note
///
/// # Errors
///
/// * `400 Bad Request` - payload failed validation (per-field messages)
/// * `401 Unauthorized` - missing or invalid access token
pub async fn save_note(
    State(notes): State<NoteService>,
    AuthUser(user): AuthUser,
    Json(request): Json<NoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let errors = request.validate();
    if !errors.is_empty() {
        tracing::warn!(user_id = %user.user_id, "note payload failed validation");
        return Err(ApiError::validation(errors));
    }

    let note = notes
        .create_or_update(request.into_draft(), user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// List handler
///
/// # Returns
///
/// `200 OK` with the caller's notes as a JSON array (store-native order,
/// empty array when there are none)
pub async fn list_notes(
    State(notes): State<NoteService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let owned = notes.list_by_owner(user.user_id).await?;
    Ok(Json(owned.into_iter().map(NoteResponse::from).collect()))
}

/// Delete handler
///
/// # Returns
///
/// `204 No Content` on success
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid access token
/// * `403 Forbidden` - the note belongs to another user
/// * `404 Not Found` - no note has this id
pub async fn delete_note(
    State(notes): State<NoteService>,
    AuthUser(user): AuthUser,
    Path(note_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    notes.delete(note_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
