//! Service layer for owner-scoped task operations.
//!
//! Every operation takes the caller's identity and scopes the target task by
//! the identifier-and-owner pair. A lookup that misses — whether the task
//! does not exist or belongs to someone else — surfaces as `None` (or `false`
//! for deletion) so callers cannot distinguish the two cases.

use crate::identity::domain::UserId;
use crate::tasks::{
    domain::{Task, TaskDetails, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Raw task fields as submitted by a caller, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Creates a draft with the required title field.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the status; when unset, [`TaskStatus::Pending`] is used.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Validates the draft into domain task details.
    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let mut details = TaskDetails::new(self.title)?;
        if let Some(description) = self.description {
            details = details.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            details = details.with_due_date(due_date);
        }
        Ok(details.with_status(self.status.unwrap_or_default()))
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

// Manual impl: cloning shares the inner `Arc`s and must not require the
// store or clock to be `Clone` themselves.
impl<S, C> Clone for TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is empty and
    /// [`TaskLifecycleError::Store`] when persistence fails. A validation
    /// failure leaves the store unchanged.
    pub async fn create(&self, owner: UserId, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let details = draft.into_details()?;
        let task = Task::create(owner, details, &*self.clock);
        self.store.store(&task).await?;
        Ok(task)
    }

    /// Returns all tasks owned by the caller, newest first. Pure read.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the listing query fails.
    pub async fn list(&self, owner: UserId) -> TaskLifecycleResult<Vec<Task>> {
        let result: TaskStoreResult<Vec<Task>> = self.store.list_for_owner(owner).await;
        Ok(result?)
    }

    /// Fetches a single task scoped to the caller, for edit-form prefill.
    ///
    /// Returns `Ok(None)` when the task does not exist or is not owned by
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the lookup fails.
    pub async fn fetch(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let result: TaskStoreResult<Option<Task>> = self.store.find_for_owner(id, owner).await;
        Ok(result?)
    }

    /// Overwrites title, description, due date, and status of a task.
    ///
    /// Returns `Ok(None)` when no task matches the identifier-and-owner
    /// pair; the caller treats that as a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the submitted title is
    /// empty. Edits apply the same title validation as creation.
    pub async fn edit(
        &self,
        owner: UserId,
        id: TaskId,
        draft: TaskDraft,
    ) -> TaskLifecycleResult<Option<Task>> {
        let details = draft.into_details()?;
        let Some(mut task) = self.store.find_for_owner(id, owner).await? else {
            return Ok(None);
        };
        task.apply_edit(details, &*self.clock);
        self.store.update(&task).await?;
        Ok(Some(task))
    }

    /// Forces a task's status to completed, leaving other fields untouched.
    ///
    /// Returns `Ok(None)` when no task matches the identifier-and-owner pair.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the lookup or update fails.
    pub async fn complete(
        &self,
        owner: UserId,
        id: TaskId,
    ) -> TaskLifecycleResult<Option<Task>> {
        let Some(mut task) = self.store.find_for_owner(id, owner).await? else {
            return Ok(None);
        };
        task.complete(&*self.clock);
        self.store.update(&task).await?;
        Ok(Some(task))
    }

    /// Permanently deletes a task scoped to the caller.
    ///
    /// Returns `Ok(false)` when no task matched; the caller treats that as a
    /// silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the deletion fails.
    pub async fn delete(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<bool> {
        let result: TaskStoreResult<bool> = self.store.delete_for_owner(id, owner).await;
        Ok(result?)
    }
}
