//! In-memory task store for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::tasks::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Looks up a task only when both identifier and owner match.
fn scoped<'a>(state: &'a InMemoryTaskState, id: TaskId, owner: UserId) -> Option<&'a Task> {
    state.tasks.get(&id).filter(|task| task.owner() == owner)
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(scoped(&state, id, owner).cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner() == owner)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if scoped(&state, task.id(), task.owner()).is_none() {
            return Err(TaskStoreError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if scoped(&state, id, owner).is_none() {
            return Ok(false);
        }
        state.tasks.remove(&id);
        Ok(true)
    }
}
