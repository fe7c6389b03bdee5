//! Landing page handler.

use crate::identity::ports::CredentialStore;
use crate::tasks::ports::TaskStore;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Response;
use minijinja::context;
use mockable::Clock;

/// GET `/` — public landing page.
pub async fn landing<U, T, C>(State(state): State<AppState<U, T, C>>) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.views.page("home.html", context! {})
}
