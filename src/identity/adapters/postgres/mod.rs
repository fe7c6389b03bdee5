//! `PostgreSQL` persistence adapter for identities.
//!
//! Accounts are persisted document-style: the full identity travels as a
//! JSONB payload, with username and email extracted into uniquely indexed
//! columns for lookup.

mod models;
mod schema;
mod store;

pub use store::{CredentialPgPool, PostgresCredentialStore};
