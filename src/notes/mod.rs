//! Notes Module
//!
//! Ownership-scoped note operations and their HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! notes/
//! ├── mod.rs      - Module exports and documentation
//! ├── service.rs  - Access-control rules over the note store
//! └── handlers.rs - HTTP handlers and request/response types
//! ```
//!
//! # Access Rules
//!
//! - Listing returns only the caller's notes
//! - Deleting someone else's note is refused (404 for a missing note wins
//!   over 403 for a foreign one)
//! - Saving is a keyed upsert owned by the caller

/// Access-control rules over the note store
pub mod service;

/// HTTP handlers for note endpoints
pub mod handlers;

pub use handlers::{delete_note, list_notes, save_note, NoteRequest, NoteResponse};
pub use service::{NoteDraft, NoteService};
