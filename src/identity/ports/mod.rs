//! Port contracts for identity persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod credential_store;

pub use credential_store::{CredentialStore, CredentialStoreError, CredentialStoreResult};
