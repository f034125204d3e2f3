/**
 * Password Hashing
 *
 * bcrypt-backed credential hashing. Every call to `hash` picks a fresh
 * random salt, so hashing the same password twice yields different digests;
 * `verify` reads the salt back out of the digest.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// One-way password hasher.
///
/// The work factor is fixed at construction. `new` uses the bcrypt default
/// cost; tests construct cheaper instances via `with_cost`.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher at the default bcrypt cost
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher at an explicit cost (bcrypt accepts 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Fails only on internal bcrypt failure; never because of the
    /// password's content. Not a user-facing error.
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// Returns `false` for a mismatch and for any malformed digest; this
    /// function does not error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
