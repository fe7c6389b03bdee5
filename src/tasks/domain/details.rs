//! Validated task field payloads shared by creation and editing.

use super::{TaskDomainError, TaskStatus};
use chrono::NaiveDate;

/// Validated, owner-independent task fields.
///
/// Both task creation and whole-record editing funnel through this type, so
/// the non-empty-title rule is enforced on every path that can set a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
}

impl TaskDetails {
    /// Creates task details with a validated title and default status.
    ///
    /// The title is trimmed; surrounding whitespace never reaches storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: None,
            due_date: None,
            status: TaskStatus::default(),
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date (calendar date, no time component).
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Decomposes the details into their field values.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>, Option<NaiveDate>, TaskStatus) {
        (self.title, self.description, self.due_date, self.status)
    }
}
