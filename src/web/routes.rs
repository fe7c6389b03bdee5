//! Route table wiring guards, layers, and handlers.

use crate::identity::ports::CredentialStore;
use crate::tasks::ports::TaskStore;
use crate::web::guards;
use crate::web::handlers::{auth, home, tasks};
use crate::web::state::AppState;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use mockable::Clock;

/// Builds the application router.
///
/// The session layer runs ahead of every route; guard extractors on the
/// handlers enforce the authenticated/unauthenticated split per route group.
#[must_use]
pub fn router<U, T, C>(state: AppState<U, T, C>) -> Router
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::landing::<U, T, C>))
        .route(
            "/register",
            get(auth::register_page::<U, T, C>).post(auth::register_submit::<U, T, C>),
        )
        .route(
            "/login",
            get(auth::login_page::<U, T, C>).post(auth::login_submit::<U, T, C>),
        )
        .route("/logout", get(auth::logout::<U, T, C>))
        .route("/dashboard", get(tasks::dashboard::<U, T, C>))
        .route(
            "/tasks/add",
            get(tasks::add_page::<U, T, C>).post(tasks::add_submit::<U, T, C>),
        )
        .route(
            "/tasks/edit/{id}",
            get(tasks::edit_page::<U, T, C>).post(tasks::edit_submit::<U, T, C>),
        )
        .route("/tasks/complete/{id}", post(tasks::complete::<U, T, C>))
        .route("/tasks/delete/{id}", post(tasks::delete::<U, T, C>))
        .layer(from_fn_with_state(
            state.clone(),
            guards::resolve_session::<U, T, C>,
        ))
        .with_state(state)
}
