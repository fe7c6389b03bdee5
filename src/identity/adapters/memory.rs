//! In-memory credential store for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{EmailAddress, Identity, UserId, Username},
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    state: Arc<RwLock<InMemoryIdentityState>>,
}

#[derive(Debug, Default)]
struct InMemoryIdentityState {
    identities: HashMap<UserId, Identity>,
    username_index: HashMap<Username, UserId>,
    email_index: HashMap<EmailAddress, UserId>,
}

impl InMemoryCredentialStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn store(&self, identity: &Identity) -> CredentialStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.username_index.contains_key(identity.username()) {
            return Err(CredentialStoreError::DuplicateUsername(
                identity.username().clone(),
            ));
        }
        if state.email_index.contains_key(identity.email()) {
            return Err(CredentialStoreError::DuplicateEmail(
                identity.email().clone(),
            ));
        }

        state
            .username_index
            .insert(identity.username().clone(), identity.id());
        state
            .email_index
            .insert(identity.email().clone(), identity.id());
        state.identities.insert(identity.id(), identity.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> CredentialStoreResult<Option<Identity>> {
        let state = self.state.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .username_index
            .get(username)
            .and_then(|id| state.identities.get(id))
            .cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CredentialStoreResult<Option<Identity>> {
        let state = self.state.read().map_err(|err| {
            CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.identities.get(id))
            .cloned())
    }
}
