/**
 * Token Codec and JWT Claims
 *
 * Issues and verifies the signed tokens that carry a session: short-lived
 * access tokens and long-lived refresh tokens, told apart by a `typ` claim
 * that verification enforces. The signing secret and the per-type validity
 * windows are fixed at construction and never change for the life of the
 * process.
 *
 * Timestamps in the claims (`iat`, `exp`) are epoch milliseconds, and the
 * expiry boundary is inclusive: a token is rejected the instant `now`
 * reaches `exp`.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Scheme prefix stripped from incoming tokens before parsing
const BEARER_PREFIX: &str = "Bearer ";

/// Distinguishes the two token roles a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token presented on authenticated requests
    Access,
    /// Long-lived token redeemed (once) for a new pair
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the owning user's id
    pub sub: String,
    /// Token role; verification requires it to match the context
    #[serde(rename = "typ")]
    pub token_type: TokenType,
    /// Issued at (epoch milliseconds)
    pub iat: i64,
    /// Expires at (epoch milliseconds, inclusive boundary)
    pub exp: i64,
    /// Random per-issuance id, so two tokens minted in the same
    /// millisecond are still distinct strings
    pub jti: String,
}

/// Why a token failed verification or could not be issued
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, undecodable structure, or unparseable subject
    #[error("token is malformed or has an invalid signature")]
    Malformed,

    /// `now >= exp`
    #[error("token has expired")]
    Expired,

    /// Valid token presented in the wrong role
    #[error("token type does not match the expected type")]
    WrongType,

    /// Signing failed while issuing
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// A freshly issued token together with its expiry instant.
///
/// The expiry is surfaced so the refresh store can mirror it without
/// re-parsing the token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed compact JWT string
    pub token: String,
    /// Expiry instant encoded in the claims
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies session tokens.
///
/// Cheap to clone; the keys are shared internally.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_validity_ms: i64,
    refresh_validity_ms: i64,
}

impl TokenCodec {
    /// Build a codec over a signing secret and per-type validity windows
    /// (wall-clock milliseconds).
    pub fn new(secret: &[u8], access_validity_ms: i64, refresh_validity_ms: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_validity_ms,
            refresh_validity_ms,
        }
    }

    /// Issue a signed token of the given type for a subject.
    ///
    /// # Errors
    ///
    /// Fails only if signing itself fails; never because of the subject.
    pub fn issue(&self, subject: Uuid, token_type: TokenType) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::milliseconds(self.validity_ms(token_type));

        let claims = Claims {
            sub: subject.to_string(),
            token_type,
            iat: now.timestamp_millis(),
            exp: expires_at.timestamp_millis(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and return its subject.
    ///
    /// Accepts the bare compact form or one carrying a `Bearer ` scheme
    /// prefix. Rejects bad signatures and undecodable input as
    /// [`TokenError::Malformed`], expired tokens (inclusive boundary) as
    /// [`TokenError::Expired`], and role mismatches as
    /// [`TokenError::WrongType`]. Never panics on hostile input.
    pub fn verify(&self, token: &str, expected_type: TokenType) -> Result<Uuid, TokenError> {
        let raw = token.trim();
        let raw = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);

        // The claims carry milliseconds, so the library's seconds-based
        // expiry pass always sees a far-future value; the decisive
        // (inclusive) comparison happens below.
        let data = decode::<Claims>(raw, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Malformed)?;
        let claims = data.claims;

        if Utc::now().timestamp_millis() >= claims.exp {
            return Err(TokenError::Expired);
        }
        if claims.token_type != expected_type {
            return Err(TokenError::WrongType);
        }

        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)
    }

    fn validity_ms(&self, token_type: TokenType) -> i64 {
        match token_type {
            TokenType::Access => self.access_validity_ms,
            TokenType::Refresh => self.refresh_validity_ms,
        }
    }
}
