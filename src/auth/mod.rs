//! Authentication Module
//!
//! This module owns the credential and session lifecycle: password hashing,
//! token issuance and verification, and the register/login/refresh flows.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── password.rs  - bcrypt password hashing
//! ├── tokens.rs    - Token codec (signed access/refresh JWTs)
//! ├── service.rs   - Registration, login, and refresh flows
//! └── handlers/    - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration handler
//!     ├── login.rs    - Login handler
//!     └── refresh.rs  - Refresh handler
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Register**: email + password → account created (no tokens)
//! 2. **Login**: credentials verified → access + refresh pair; the refresh
//!    token's digest is persisted
//! 3. **Refresh**: refresh token redeemed (single-use) → new pair
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with per-call salts
//! - Access and refresh tokens carry a type tag that verification enforces
//! - Refresh tokens are stored only as SHA-256 digests and rotate on use
//! - Credential failures are uniform 401s (no user enumeration)

/// bcrypt password hashing
pub mod password;

/// Token codec for signed access/refresh tokens
pub mod tokens;

/// Registration, login, and refresh flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, refresh, register};
pub use password::PasswordHasher;
pub use service::{AuthService, TokenPair};
pub use tokens::{TokenCodec, TokenType};
