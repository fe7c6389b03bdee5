//! Domain model for personal task management.
//!
//! The task domain models task creation, editing, completion, and deletion
//! for a single owning identity while keeping all infrastructure concerns
//! outside of the domain boundary. Every task belongs to exactly one owner,
//! assigned at creation and immutable afterwards.

mod details;
mod error;
mod ids;
mod task;

pub use details::TaskDetails;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus};
