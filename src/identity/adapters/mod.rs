//! Adapter implementations of the credential store port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCredentialStore;
pub use postgres::PostgresCredentialStore;
