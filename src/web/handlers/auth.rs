//! Registration, login, and logout handlers.
//!
//! Failure messages are deliberately generic: a duplicate registration never
//! says which field collided, and a failed login never says whether the
//! username or the password was wrong.

use crate::identity::ports::CredentialStore;
use crate::identity::services::{AccountError, Registration};
use crate::tasks::ports::TaskStore;
use crate::web::forms::{LoginForm, RegisterForm};
use crate::web::guards::Guest;
use crate::web::state::AppState;
use crate::web::views;
use axum::extract::{Form, State};
use axum::response::{Redirect, Response};
use minijinja::context;
use mockable::Clock;

use super::with_session_cookie;

/// GET `/register` — registration form.
pub async fn register_page<U, T, C>(
    _: Guest,
    State(state): State<AppState<U, T, C>>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .views
        .page("register.html", context! { message => None::<String> })
}

/// POST `/register` — create an identity and establish a session.
pub async fn register_submit<U, T, C>(
    _: Guest,
    State(state): State<AppState<U, T, C>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    if form.has_missing_fields() {
        return state
            .views
            .page("register.html", context! { message => "All fields are required." });
    }

    let registration = Registration::new(form.username, form.email, form.password);
    match state.accounts.register(registration).await {
        Ok(identity) => {
            let cookie = state.sessions.establish(&identity);
            with_session_cookie(&cookie, Redirect::to("/dashboard"))
        }
        Err(AccountError::Taken) => state.views.page(
            "register.html",
            context! { message => "Username or email already exists." },
        ),
        Err(AccountError::Domain(err)) => state
            .views
            .page("register.html", context! { message => err.to_string() }),
        Err(err) => {
            tracing::error!(error = %err, "registration failed");
            views::internal_error()
        }
    }
}

/// GET `/login` — login form.
pub async fn login_page<U, T, C>(
    _: Guest,
    State(state): State<AppState<U, T, C>>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.views.page(
        "login.html",
        context! { message => None::<String>, username => "" },
    )
}

/// POST `/login` — verify credentials and establish a session.
pub async fn login_submit<U, T, C>(
    _: Guest,
    State(state): State<AppState<U, T, C>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    if form.has_missing_fields() {
        return state.views.page(
            "login.html",
            context! { message => "All fields are required.", username => form.username },
        );
    }

    match state
        .accounts
        .authenticate(&form.username, &form.password)
        .await
    {
        Ok(identity) => {
            let cookie = state.sessions.establish(&identity);
            with_session_cookie(&cookie, Redirect::to("/dashboard"))
        }
        Err(AccountError::InvalidCredentials) => state.views.page(
            "login.html",
            context! { message => "Invalid username or password.", username => form.username },
        ),
        Err(err) => {
            tracing::error!(error = %err, "login failed");
            views::internal_error()
        }
    }
}

/// GET `/logout` — destroy the session and return to the login page.
pub async fn logout<U, T, C>(State(state): State<AppState<U, T, C>>) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    with_session_cookie(&state.sessions.clearing_cookie(), Redirect::to("/login"))
}
