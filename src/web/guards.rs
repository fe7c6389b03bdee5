//! Session resolution layer and access-control guard extractors.
//!
//! The layer runs ahead of every route: it resolves the session cookie into
//! an identity snapshot, stashes the result in request extensions, and
//! re-issues the cookie when the session is inside its renewal window. The
//! two guards are pure predicates over that stashed result.

use crate::identity::ports::CredentialStore;
use crate::session::SessionClaims;
use crate::tasks::ports::TaskStore;
use crate::web::state::AppState;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::{Redirect, Response};
use mockable::Clock;

/// Session resolution result stashed in request extensions.
#[derive(Debug, Clone)]
pub struct SessionContext(pub Option<SessionClaims>);

/// Resolves the session cookie and applies sliding renewal.
pub async fn resolve_session<U, T, C>(
    State(state): State<AppState<U, T, C>>,
    mut request: Request,
    next: Next,
) -> Response
where
    U: CredentialStore + 'static,
    T: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let cookie_header = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    let claims = state.sessions.resolve(cookie_header);

    let renewal = claims
        .as_ref()
        .filter(|current| state.sessions.needs_renewal(current))
        .map(|current| state.sessions.renew(current));

    request.extensions_mut().insert(SessionContext(claims));
    let mut response = next.run(request).await;

    // A handler that set its own session cookie (login, logout) wins over
    // the renewal.
    if let Some(cookie) = renewal {
        if !response.headers().contains_key(header::SET_COOKIE) {
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
        }
    }
    response
}

/// Guard for routes that require an authenticated caller.
///
/// Extraction fails with a redirect to the login page when no session
/// resolved.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .and_then(|context| context.0.clone())
            .map(Self)
            .ok_or_else(|| Redirect::to("/login"))
    }
}

/// Guard for routes reserved for unauthenticated callers.
///
/// Extraction fails with a redirect to the dashboard when a session
/// resolved.
#[derive(Debug, Clone, Copy)]
pub struct Guest;

impl<S> FromRequestParts<S> for Guest
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let authenticated = parts
            .extensions
            .get::<SessionContext>()
            .is_some_and(|context| context.0.is_some());
        if authenticated {
            return Err(Redirect::to("/dashboard"));
        }
        Ok(Self)
    }
}
