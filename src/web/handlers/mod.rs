//! Route handlers for the server-rendered pages.

pub mod auth;
pub mod home;
pub mod tasks;

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};

/// Attaches a session `Set-Cookie` header to a redirect.
fn with_session_cookie(cookie: &str, redirect: Redirect) -> Response {
    let mut response = redirect.into_response();
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
