//! Domain-focused tests for task validation and lifecycle behaviour.

use crate::identity::domain::UserId;
use crate::tasks::domain::{Task, TaskDetails, TaskDomainError, TaskStatus};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn details_new_trims_title() {
    let details = TaskDetails::new("  Water the plants  ").expect("valid details");
    assert_eq!(details.title(), "Water the plants");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn details_new_rejects_blank_title(#[case] title: &str) {
    let result = TaskDetails::new(title);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn status_round_trips_through_storage_form() {
    for status in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn status_parse_normalises_case_and_whitespace() {
    assert_eq!(
        TaskStatus::try_from(" In_Progress "),
        Ok(TaskStatus::InProgress)
    );
}

#[rstest]
fn status_parse_accepts_hyphenated_spelling() {
    assert_eq!(
        TaskStatus::try_from("in-progress"),
        Ok(TaskStatus::InProgress)
    );
}

#[rstest]
fn status_parse_rejects_unknown_values() {
    assert!(TaskStatus::try_from("done").is_err());
}

#[rstest]
fn create_assigns_owner_and_matching_timestamps(clock: DefaultClock) {
    let owner = UserId::new();
    let details = TaskDetails::new("Prune the roses")
        .expect("valid details")
        .with_description("Front bed only")
        .with_due_date(NaiveDate::from_ymd_opt(2026, 9, 15).expect("valid date"));
    let task = Task::create(owner, details, &clock);

    assert_eq!(task.owner(), owner);
    assert_eq!(task.title(), "Prune the roses");
    assert_eq!(task.description(), Some("Front bed only"));
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn apply_edit_overwrites_fields_and_touches(clock: DefaultClock) {
    let owner = UserId::new();
    let details = TaskDetails::new("Original")
        .expect("valid details")
        .with_description("Keep me?")
        .with_due_date(NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"));
    let mut task = Task::create(owner, details, &clock);
    let created_at = task.created_at();

    let edit = TaskDetails::new("Revised")
        .expect("valid details")
        .with_status(TaskStatus::InProgress);
    task.apply_edit(edit, &clock);

    assert_eq!(task.title(), "Revised");
    assert_eq!(task.description(), None);
    assert_eq!(task.due_date(), None);
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.created_at(), created_at);
    assert!(task.updated_at() >= created_at);
}

#[rstest]
fn complete_forces_status_and_preserves_other_fields(clock: DefaultClock) {
    let owner = UserId::new();
    let due = NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date");
    let details = TaskDetails::new("Repot the fern")
        .expect("valid details")
        .with_description("Use the larger pot")
        .with_due_date(due)
        .with_status(TaskStatus::InProgress);
    let mut task = Task::create(owner, details, &clock);

    task.complete(&clock);

    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.title(), "Repot the fern");
    assert_eq!(task.description(), Some("Use the larger pot"));
    assert_eq!(task.due_date(), Some(due));
}

#[rstest]
fn complete_is_idempotent(clock: DefaultClock) {
    let owner = UserId::new();
    let details = TaskDetails::new("Sweep the path").expect("valid details");
    let mut task = Task::create(owner, details, &clock);

    task.complete(&clock);
    task.complete(&clock);

    assert_eq!(task.status(), TaskStatus::Completed);
}
