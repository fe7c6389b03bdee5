//! Salted password hashing and verification.
//!
//! Passwords are stored only as Argon2id hashes in PHC string format; the
//! salt is generated per hash. Plaintext never leaves the constructor.

use super::IdentityDomainError;
use argon2::{Argon2, PasswordVerifier};
use password_hash::{PasswordHash as PhcString, PasswordHasher, SaltString};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Salted Argon2id password hash in PHC string format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyPassword`] for an empty password
    /// and [`IdentityDomainError::PasswordHashing`] when the hasher fails.
    pub fn from_plaintext(password: &str) -> Result<Self, IdentityDomainError> {
        if password.is_empty() {
            return Err(IdentityDomainError::EmptyPassword);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| IdentityDomainError::PasswordHashing(err.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Reconstructs a hash from its persisted PHC string.
    #[must_use]
    pub const fn from_stored(phc: String) -> Self {
        Self(phc)
    }

    /// Verifies a plaintext password against this hash.
    ///
    /// A malformed stored hash verifies as false rather than erroring, so a
    /// corrupted record behaves like a wrong password.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        PhcString::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }

    /// Returns the PHC string for persistence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = PasswordHash::from_plaintext("hunter2-but-longer")
            .expect("hashing should succeed");
        assert!(hash.verify("hunter2-but-longer"));
        assert!(!hash.verify("wrong password"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(
            PasswordHash::from_plaintext(""),
            Err(IdentityDomainError::EmptyPassword)
        );
    }

    #[test]
    fn salts_differ_between_hashes() {
        let first = PasswordHash::from_plaintext("same input").expect("hashing should succeed");
        let second = PasswordHash::from_plaintext("same input").expect("hashing should succeed");
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        let hash = PasswordHash::from_stored("not-a-phc-string".to_owned());
        assert!(!hash.verify("anything"));
    }

    #[test]
    fn debug_output_is_redacted() {
        let hash = PasswordHash::from_plaintext("secret").expect("hashing should succeed");
        assert_eq!(format!("{hash:?}"), "PasswordHash([REDACTED])");
    }
}
