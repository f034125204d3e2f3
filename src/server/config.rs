/**
 * Server Configuration
 *
 * This module loads and validates server configuration from the
 * environment. The signing secret and the database URL are required; a
 * process without them refuses to start. Token validity windows and the
 * listen port have defaults.
 *
 * # Environment Variables
 *
 * - `JWT_SECRET` (required) - base64-encoded token signing secret
 * - `DATABASE_URL` (required) - Postgres connection string
 * - `ACCESS_TOKEN_TTL_MS` (default 900000, 15 minutes)
 * - `REFRESH_TOKEN_TTL_MS` (default 2592000000, 30 days)
 * - `SERVER_PORT` (default 3000)
 */

use base64::Engine;
use thiserror::Error;

/// Default access token validity: 15 minutes
const DEFAULT_ACCESS_TOKEN_TTL_MS: i64 = 900_000;

/// Default refresh token validity: 30 days
const DEFAULT_REFRESH_TOKEN_TTL_MS: i64 = 2_592_000_000;

/// Default listen port
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Why configuration loading failed
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    /// An environment variable is set but unusable
    #[error("environment variable {0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// Immutable server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Decoded token signing secret
    pub signing_secret: Vec<u8>,
    /// Access token validity window (wall-clock milliseconds)
    pub access_token_ttl_ms: i64,
    /// Refresh token validity window (wall-clock milliseconds)
    pub refresh_token_ttl_ms: i64,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// `Missing` if `JWT_SECRET` or `DATABASE_URL` is unset; `Invalid` if
    /// the secret is not valid base64 or a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let secret_b64 =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let signing_secret = base64::engine::general_purpose::STANDARD
            .decode(secret_b64.trim())
            .map_err(|err| ConfigError::Invalid("JWT_SECRET", err.to_string()))?;

        let access_token_ttl_ms =
            parse_or_default("ACCESS_TOKEN_TTL_MS", DEFAULT_ACCESS_TOKEN_TTL_MS)?;
        let refresh_token_ttl_ms =
            parse_or_default("REFRESH_TOKEN_TTL_MS", DEFAULT_REFRESH_TOKEN_TTL_MS)?;
        let port = parse_or_default("SERVER_PORT", DEFAULT_SERVER_PORT)?;

        Ok(Self {
            database_url,
            signing_secret,
            access_token_ttl_ms,
            refresh_token_ttl_ms,
            port,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::Invalid(name, err.to_string())),
        Err(_) => Ok(default),
    }
}
