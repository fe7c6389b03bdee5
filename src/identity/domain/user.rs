//! Identity aggregate root.

use super::{EmailAddress, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Registered user account.
///
/// Immutable after creation; account-management flows that would mutate an
/// identity are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: UserId,
    username: Username,
    email: EmailAddress,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted identity.
#[derive(Debug, Clone)]
pub struct PersistedIdentityData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password hash.
    pub password_hash: PasswordHash,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Creates a new identity from validated registration values.
    #[must_use]
    pub fn new(
        username: Username,
        email: EmailAddress,
        password_hash: PasswordHash,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an identity from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIdentityData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Verifies a plaintext password against the stored hash.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash.verify(password)
    }
}
