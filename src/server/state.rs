/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central container handed to the router: the two domain
 * services, plus the token codec and user store the auth middleware reads
 * directly. The stores arrive as `Arc<dyn …>` so the same assembly works
 * over Postgres in production and the in-memory backends in tests.
 *
 * # Thread Safety
 *
 * Everything here is cheaply cloneable and `Send + Sync`; per-request
 * clones are the intended usage.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::password::PasswordHasher;
use crate::auth::service::AuthService;
use crate::auth::tokens::TokenCodec;
use crate::notes::service::NoteService;
use crate::store::{NoteStore, RefreshTokenStore, UserStore};

/// Application state for the router
///
/// # Fields
///
/// * `auth` - registration/login/refresh flows
/// * `notes` - ownership-scoped note operations
/// * `tokens` - token codec, used by the auth middleware
/// * `users` - user store, used by the auth middleware's subject re-check
#[derive(Clone)]
pub struct AppState {
    /// Authentication flows
    pub auth: AuthService,
    /// Note access control
    pub notes: NoteService,
    /// Token codec for the middleware's access-token verification
    pub tokens: TokenCodec,
    /// User store for the middleware's subject re-check
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Assemble the state from its injected parts.
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        notes: Arc<dyn NoteStore>,
        hasher: PasswordHasher,
        tokens: TokenCodec,
    ) -> Self {
        let auth = AuthService::new(users.clone(), refresh_tokens, hasher, tokens.clone());
        let notes = NoteService::new(notes);
        Self {
            auth,
            notes,
            tokens,
            users,
        }
    }

    /// State over in-memory stores with a cheap hasher, for unit tests.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        use crate::store::memory::{
            InMemoryNoteStore, InMemoryRefreshTokenStore, InMemoryUserStore,
        };

        Self::new(
            Arc::new(InMemoryUserStore::default()),
            Arc::new(InMemoryRefreshTokenStore::default()),
            Arc::new(InMemoryNoteStore::default()),
            PasswordHasher::with_cost(4),
            TokenCodec::new(b"test-signing-secret", 60_000, 120_000),
        )
    }
}

/// Implement FromRef for AuthService
///
/// This allows the auth handlers to take `State<AuthService>` instead of
/// the whole `AppState`.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Implement FromRef for NoteService
///
/// This allows the note handlers to take `State<NoteService>` instead of
/// the whole `AppState`.
impl FromRef<AppState> for NoteService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notes.clone()
    }
}
