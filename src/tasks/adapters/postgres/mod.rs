//! `PostgreSQL` persistence adapter for tasks.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
