//! Adapter implementations of the task store port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskStore;
pub use postgres::PostgresTaskStore;
