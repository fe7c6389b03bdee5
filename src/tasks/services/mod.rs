//! Orchestration services for the task lifecycle.

pub mod lifecycle;

pub use lifecycle::{TaskDraft, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
