//! Store port for owner-scoped task persistence.
//!
//! Every read and mutation is scoped by the pair of task identifier and
//! owner identifier. No method addresses a task by identifier alone; this is
//! the contract-level expression of the ownership invariant.

use crate::identity::domain::UserId;
use crate::tasks::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task identifier
    /// already exists.
    async fn store(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier, scoped to the given owner.
    ///
    /// Returns `None` both when no such task exists and when the task is
    /// owned by a different identity; callers cannot distinguish the two.
    async fn find_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<Option<Task>>;

    /// Returns all tasks owned by the given identity, newest first.
    async fn list_for_owner(&self, owner: UserId) -> TaskStoreResult<Vec<Task>>;

    /// Persists changes to an existing task, matched on identifier and owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task matches the pair.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Permanently removes a task, scoped to the given owner.
    ///
    /// Returns `false` when no task matched; removal is immediate and there
    /// is no soft-delete.
    async fn delete_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<bool>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// No task matched the identifier-and-owner pair.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
