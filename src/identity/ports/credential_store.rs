//! Store port for identity persistence and lookup.
//!
//! Uniqueness of usernames and email addresses is part of the contract. The
//! or-style "username or email" lookup used at registration is expressed as
//! two explicit queries rather than a store-specific disjunction operator.

use crate::identity::domain::{EmailAddress, Identity, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// Identity persistence contract.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stores a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::DuplicateUsername`] or
    /// [`CredentialStoreError::DuplicateEmail`] when the corresponding
    /// unique constraint is violated.
    async fn store(&self, identity: &Identity) -> CredentialStoreResult<()>;

    /// Finds an identity by username.
    ///
    /// Returns `None` when no account uses the username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> CredentialStoreResult<Option<Identity>>;

    /// Finds an identity by email address.
    ///
    /// Returns `None` when no account uses the address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CredentialStoreResult<Option<Identity>>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// An identity with the same username already exists.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// An identity with the same email address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
