/**
 * Authentication Request/Response Types
 *
 * Request and response bodies for the authentication endpoints, plus the
 * boundary validation for registration.
 *
 * Registration fields are optional at the serde layer so a missing field
 * becomes a per-field validation message rather than a deserialization
 * rejection. Login and refresh deserialize strictly; their only failure
 * surface is 401.
 */

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address (required, must contain '@' after trimming)
    pub email: Option<String>,
    /// Plaintext password (required, policy checked below)
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Check the payload against the boundary rules.
    ///
    /// Password policy: at least 9 characters with at least one uppercase
    /// letter, one lowercase letter, and one digit.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match self.email.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::new("email", "email is required"));
            }
            Some(email) if !email.contains('@') => {
                errors.push(FieldError::new(
                    "email",
                    "email must be a valid email address",
                ));
            }
            Some(_) => {}
        }

        match self.password.as_deref() {
            None => errors.push(FieldError::new("password", "password is required")),
            Some(password) => validate_password(password, &mut errors),
        }

        errors
    }
}

fn validate_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.chars().count() < 9 {
        errors.push(FieldError::new(
            "password",
            "password must be at least 9 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "password must contain an uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new(
            "password",
            "password must contain a lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(
            "password",
            "password must contain a digit",
        ));
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address, looked up exactly as sent
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Refresh request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The raw refresh token to redeem
    pub refresh_token: String,
}

/// Token pair returned by login and refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    /// Short-lived access token
    pub access_token: String,
    /// Single-use refresh token
    pub refresh_token: String,
}

impl From<crate::auth::service::TokenPair> for TokenPairResponse {
    fn from(pair: crate::auth::service::TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
