/**
 * Authentication Flows
 *
 * Orchestrates registration, login, and refresh-token rotation over the
 * injected stores, hasher, and token codec.
 *
 * # Flow Notes
 *
 * - Registration trims the email before the duplicate check and persists
 *   the trimmed form. Login looks up the raw string as sent.
 * - Login failures (unknown email, wrong password) return the same error
 *   value, so responses cannot be told apart.
 * - A refresh token is single-use: redeeming it deletes its stored digest
 *   with an atomic conditional delete, and only the caller whose delete
 *   removed the record gets a new pair. Everyone else sees `InvalidToken`.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password::PasswordHasher;
use crate::auth::tokens::{TokenCodec, TokenType};
use crate::error::ApiError;
use crate::store::{hash_refresh_token, RefreshTokenStore, StoreError, User, UserStore};

/// Raw access/refresh tokens handed back by login and refresh
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,
    /// Single-use refresh token
    pub refresh_token: String,
}

/// Registration, login, and session-refresh flows
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    hasher: PasswordHasher,
    tokens: TokenCodec,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        hasher: PasswordHasher,
        tokens: TokenCodec,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            hasher,
            tokens,
        }
    }

    /// Register a new user.
    ///
    /// The email is trimmed before the duplicate check and stored trimmed.
    /// No tokens are issued; the client logs in separately.
    ///
    /// # Errors
    ///
    /// `DuplicateIdentity` if the trimmed email is already registered
    /// (whether caught by the lookup or by the store's uniqueness
    /// constraint under a concurrent duplicate).
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let email = email.trim();

        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("registration rejected: email already in use");
            return Err(ApiError::DuplicateIdentity);
        }

        let password_hash = self.hasher.hash(password).map_err(|err| {
            tracing::error!("password hashing failed: {}", err);
            ApiError::unexpected("password hashing failed")
        })?;

        let user = User::new(email, password_hash);
        match self.users.insert(user.clone()).await {
            Ok(()) => {}
            Err(StoreError::Conflict) => {
                tracing::warn!("registration rejected: email already in use");
                return Err(ApiError::DuplicateIdentity);
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate a user and start a session.
    ///
    /// Looks up the email exactly as sent. On success returns a fresh
    /// access/refresh pair; only the refresh token's digest is persisted.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown email or a failed password
    /// check, indistinguishably.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("login rejected: unknown email");
                return Err(ApiError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(ApiError::InvalidCredentials);
        }

        let pair = self.issue_session(user.id).await?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(pair)
    }

    /// Redeem a refresh token for a new access/refresh pair.
    ///
    /// The old token's stored digest is removed by an atomic conditional
    /// delete before anything new is issued, so a given raw token rotates
    /// at most once even under concurrent redemption.
    ///
    /// # Errors
    ///
    /// `InvalidToken` when verification fails (signature, expiry, type),
    /// when the subject no longer resolves to a user, or when no stored
    /// digest was deleted (already redeemed, or never issued by us).
    pub async fn refresh(&self, raw_refresh_token: &str) -> Result<TokenPair, ApiError> {
        let subject = self
            .tokens
            .verify(raw_refresh_token, TokenType::Refresh)
            .map_err(|err| {
                tracing::warn!("refresh rejected: {}", err);
                ApiError::InvalidToken
            })?;

        let user = self.users.find_by_id(subject).await?.ok_or_else(|| {
            tracing::warn!("refresh rejected: subject no longer exists");
            ApiError::InvalidToken
        })?;

        let token_hash = hash_refresh_token(raw_refresh_token);
        let redeemed = self
            .refresh_tokens
            .delete_by_owner_and_hash(user.id, &token_hash)
            .await?;
        if !redeemed {
            tracing::warn!(user_id = %user.id, "refresh rejected: token already redeemed or unknown");
            return Err(ApiError::InvalidToken);
        }

        let pair = self.issue_session(user.id).await?;
        tracing::info!(user_id = %user.id, "session refreshed");
        Ok(pair)
    }

    /// Issue an access/refresh pair and persist the refresh digest.
    async fn issue_session(&self, owner_id: Uuid) -> Result<TokenPair, ApiError> {
        let access = self
            .tokens
            .issue(owner_id, TokenType::Access)
            .map_err(|err| {
                tracing::error!("access token issuance failed: {}", err);
                ApiError::unexpected("token issuance failed")
            })?;
        let refresh = self
            .tokens
            .issue(owner_id, TokenType::Refresh)
            .map_err(|err| {
                tracing::error!("refresh token issuance failed: {}", err);
                ApiError::unexpected("token issuance failed")
            })?;

        self.refresh_tokens
            .put(owner_id, &hash_refresh_token(&refresh.token), refresh.expires_at)
            .await?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }
}
