//! Urlencoded form payloads and their mapping into service requests.

use crate::tasks::domain::TaskStatus;
use crate::tasks::services::TaskDraft;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Registration form fields.
///
/// `Debug` output redacts the password so the plaintext cannot leak through
/// logs.
#[derive(Clone, Deserialize)]
pub struct RegisterForm {
    /// Desired username.
    #[serde(default)]
    pub username: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[serde(default)]
    pub password: String,
}

impl RegisterForm {
    /// Returns true when any required field is missing.
    #[must_use]
    pub fn has_missing_fields(&self) -> bool {
        self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login form fields.
///
/// `Debug` output redacts the password so the plaintext cannot leak through
/// logs.
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    /// Account username.
    #[serde(default)]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Returns true when any required field is missing.
    #[must_use]
    pub fn has_missing_fields(&self) -> bool {
        self.username.trim().is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Task add/edit form fields.
///
/// Optional fields arrive as empty strings from the browser; mapping to the
/// service layer turns them into `None`. A malformed due date is treated as
/// unset rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskForm {
    /// Task title; required, validated by the service layer.
    #[serde(default)]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Due date in `%Y-%m-%d` format, as produced by date inputs.
    #[serde(default)]
    pub due_date: String,
    /// Lifecycle status; an unknown value falls back to pending.
    #[serde(default)]
    pub status: String,
}

impl TaskForm {
    /// Maps the form into a service-layer draft.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        let mut draft = TaskDraft::new(self.title);
        if !self.description.trim().is_empty() {
            draft = draft.with_description(self.description);
        }
        if let Ok(due_date) = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d") {
            draft = draft.with_due_date(due_date);
        }
        let status = TaskStatus::try_from(self.status.as_str()).unwrap_or_default();
        draft.with_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, due_date: &str, status: &str) -> TaskForm {
        TaskForm {
            title: title.to_owned(),
            description: description.to_owned(),
            due_date: due_date.to_owned(),
            status: status.to_owned(),
        }
    }

    #[test]
    fn empty_optionals_map_to_unset() {
        let draft = form("Water plants", "", "", "").into_draft();
        assert_eq!(
            draft,
            TaskDraft::new("Water plants").with_status(TaskStatus::Pending)
        );
    }

    #[test]
    fn populated_fields_are_carried() {
        let draft = form("Ship release", "cut the tag", "2026-09-01", "in_progress").into_draft();
        let expected = TaskDraft::new("Ship release")
            .with_description("cut the tag")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap_or_default())
            .with_status(TaskStatus::InProgress);
        assert_eq!(draft, expected);
    }

    #[test]
    fn malformed_due_date_is_treated_as_unset() {
        let draft = form("T", "", "next tuesday", "pending").into_draft();
        assert_eq!(draft, TaskDraft::new("T").with_status(TaskStatus::Pending));
    }

    #[test]
    fn hyphenated_status_is_carried_not_defaulted() {
        let draft = form("T", "", "", "in-progress").into_draft();
        assert_eq!(
            draft,
            TaskDraft::new("T").with_status(TaskStatus::InProgress)
        );
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        let draft = form("T", "", "", "someday").into_draft();
        assert_eq!(draft, TaskDraft::new("T").with_status(TaskStatus::Pending));
    }

    #[test]
    fn form_debug_output_redacts_passwords() {
        let register = RegisterForm {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "hunter22".to_owned(),
        };
        let login = LoginForm {
            username: "alice".to_owned(),
            password: "hunter22".to_owned(),
        };

        let register_debug = format!("{register:?}");
        let login_debug = format!("{login:?}");
        assert!(register_debug.contains("[REDACTED]"));
        assert!(!register_debug.contains("hunter22"));
        assert!(login_debug.contains("[REDACTED]"));
        assert!(!login_debug.contains("hunter22"));
    }
}
