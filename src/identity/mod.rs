//! User identity management.
//!
//! This module implements registration and credential verification for user
//! accounts. Identities are immutable after creation; password material is
//! stored only as a salted Argon2id hash. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
