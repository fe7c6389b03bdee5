//! Service layer for registration and credential verification.
//!
//! Error reporting is deliberately coarse: a duplicate username and a
//! duplicate email collapse into one undifferentiated failure, and a missing
//! account and a wrong password collapse into another, so responses never
//! reveal which record or field matched.

use crate::identity::{
    domain::{EmailAddress, Identity, IdentityDomainError, PasswordHash, Username},
    ports::{CredentialStore, CredentialStoreError},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Raw registration fields as submitted by a caller.
///
/// `Debug` output redacts the password so the plaintext cannot leak through
/// logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Registration {
    /// Creates a registration request from its three required fields.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A submitted field failed validation.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// The username or email address is already registered. Never specifies
    /// which.
    #[error("username or email already exists")]
    Taken,

    /// The username or password did not match. Never specifies which.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Store operation failed.
    #[error(transparent)]
    Store(CredentialStoreError),
}

/// Result type for account service operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Account registration and login service.
pub struct AccountService<S, C>
where
    S: CredentialStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

// Manual impl: cloning shares the inner `Arc`s and must not require the
// store or clock to be `Clone` themselves.
impl<S, C> Clone for AccountService<S, C>
where
    S: CredentialStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> AccountService<S, C>
where
    S: CredentialStore,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Registers a new identity.
    ///
    /// The username and email are checked with two explicit lookups before
    /// insertion; the store's unique constraints still back the check in the
    /// window between lookup and insert.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Domain`] when a field fails validation and
    /// [`AccountError::Taken`] when either the username or the email address
    /// is already registered.
    pub async fn register(&self, registration: Registration) -> AccountResult<Identity> {
        let username = Username::new(registration.username)?;
        let email = EmailAddress::new(registration.email)?;
        let password_hash = PasswordHash::from_plaintext(&registration.password)?;

        let by_username = self
            .store
            .find_by_username(&username)
            .await
            .map_err(AccountError::Store)?;
        let by_email = self
            .store
            .find_by_email(&email)
            .await
            .map_err(AccountError::Store)?;
        if by_username.is_some() || by_email.is_some() {
            return Err(AccountError::Taken);
        }

        let identity = Identity::new(username, email, password_hash, &*self.clock);
        self.store.store(&identity).await.map_err(|err| match err {
            CredentialStoreError::DuplicateUsername(_)
            | CredentialStoreError::DuplicateEmail(_) => AccountError::Taken,
            other => AccountError::Store(other),
        })?;
        Ok(identity)
    }

    /// Verifies a username-and-password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] when the account does
    /// not exist or the password does not match; the two cases are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> AccountResult<Identity> {
        let username = Username::new(username).map_err(|_| AccountError::InvalidCredentials)?;
        let identity = self
            .store
            .find_by_username(&username)
            .await
            .map_err(AccountError::Store)?
            .ok_or(AccountError::InvalidCredentials)?;

        if !identity.verify_password(password) {
            return Err(AccountError::InvalidCredentials);
        }
        Ok(identity)
    }
}
