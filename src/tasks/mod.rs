//! Task lifecycle management.
//!
//! This module implements the owner-scoped task lifecycle: creating tasks,
//! listing them newest first, editing any field, forcing completion, and
//! permanent deletion. Every operation is scoped by the pair of task
//! identifier and owning identity, so one user's tasks are unreachable from
//! another user's session even by guessing identifiers. The module follows
//! hexagonal architecture:
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
