//! Taskboard: multi-user task tracking over HTTP.
//!
//! This crate provides account registration and login, signed stateless
//! session cookies, and an ownership-scoped task lifecycle rendered as
//! server-side HTML pages.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Accounts, credential validation, and password hashing
//! - [`session`]: Signed session cookies with sliding renewal
//! - [`tasks`]: Owner-scoped task creation and lifecycle tracking
//! - [`web`]: Axum routes, guards, and template rendering
//! - [`config`]: Environment-driven process configuration

pub mod config;
pub mod identity;
pub mod session;
pub mod tasks;
pub mod web;
