//! Owner-scoped task handlers.
//!
//! Every operation scopes its target by the caller's session identity. A
//! miss — nonexistent task, someone else's task, or an unparseable
//! identifier — is answered with the same silent redirect to the dashboard,
//! so responses never leak whether another user's task exists.

use crate::identity::ports::CredentialStore;
use crate::tasks::domain::TaskId;
use crate::tasks::ports::TaskStore;
use crate::tasks::services::TaskLifecycleError;
use crate::web::forms::TaskForm;
use crate::web::guards::CurrentUser;
use crate::web::state::AppState;
use crate::web::views;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use minijinja::context;
use mockable::Clock;
use uuid::Uuid;

/// Parses a path segment into a task identifier.
///
/// An unparseable identifier cannot name any task and is handled exactly
/// like a missing one.
fn parse_task_id(raw: &str) -> Option<TaskId> {
    Uuid::parse_str(raw).ok().map(TaskId::from_uuid)
}

fn back_to_dashboard() -> Response {
    Redirect::to("/dashboard").into_response()
}

/// GET `/dashboard` — list the caller's tasks, newest first.
pub async fn dashboard<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    match state.tasks.list(user.user_id).await {
        Ok(tasks) => state
            .views
            .page("dashboard.html", context! { user => user, tasks => tasks }),
        Err(err) => {
            tracing::error!(error = %err, "task listing failed");
            views::internal_error()
        }
    }
}

/// GET `/tasks/add` — task creation form.
pub async fn add_page<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.views.page(
        "add_task.html",
        context! { user => user, message => None::<String> },
    )
}

/// POST `/tasks/add` — create a task owned by the caller.
pub async fn add_submit<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
    Form(form): Form<TaskForm>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    match state.tasks.create(user.user_id, form.into_draft()).await {
        Ok(_) => back_to_dashboard(),
        Err(TaskLifecycleError::Domain(_)) => state.views.page(
            "add_task.html",
            context! { user => user, message => "Title is required." },
        ),
        Err(err) => {
            tracing::error!(error = %err, "task creation failed");
            views::internal_error()
        }
    }
}

/// GET `/tasks/edit/{id}` — edit form, pre-filled from the stored task.
pub async fn edit_page<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
    Path(raw_id): Path<String>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return back_to_dashboard();
    };
    match state.tasks.fetch(user.user_id, id).await {
        Ok(Some(task)) => state.views.page(
            "edit_task.html",
            context! { user => user, task => task, message => None::<String> },
        ),
        Ok(None) => back_to_dashboard(),
        Err(err) => {
            tracing::error!(error = %err, "task fetch failed");
            views::internal_error()
        }
    }
}

/// POST `/tasks/edit/{id}` — overwrite a task's fields.
pub async fn edit_submit<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
    Path(raw_id): Path<String>,
    Form(form): Form<TaskForm>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return back_to_dashboard();
    };
    match state
        .tasks
        .edit(user.user_id, id, form.clone().into_draft())
        .await
    {
        // A miss is a silent no-op, indistinguishable from success.
        Ok(_) => back_to_dashboard(),
        Err(TaskLifecycleError::Domain(_)) => state.views.page(
            "edit_task.html",
            context! {
                user => user,
                task => context! {
                    id => raw_id,
                    title => form.title,
                    description => form.description,
                    due_date => form.due_date,
                    status => form.status,
                },
                message => "Title is required.",
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "task edit failed");
            views::internal_error()
        }
    }
}

/// POST `/tasks/complete/{id}` — force the task's status to completed.
pub async fn complete<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
    Path(raw_id): Path<String>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return back_to_dashboard();
    };
    match state.tasks.complete(user.user_id, id).await {
        Ok(_) => back_to_dashboard(),
        Err(err) => {
            tracing::error!(error = %err, "task completion failed");
            views::internal_error()
        }
    }
}

/// POST `/tasks/delete/{id}` — permanently remove a task.
pub async fn delete<U, T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<U, T, C>>,
    Path(raw_id): Path<String>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return back_to_dashboard();
    };
    match state.tasks.delete(user.user_id, id).await {
        Ok(_) => back_to_dashboard(),
        Err(err) => {
            tracing::error!(error = %err, "task deletion failed");
            views::internal_error()
        }
    }
}
