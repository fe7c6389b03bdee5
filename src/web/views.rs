//! Minijinja view rendering.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Handlers render by name; a template failure is an internal error and is
//! never surfaced to the client beyond a generic failure page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Embedded template sources, registered under their route-facing names.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("add_task.html", include_str!("../../templates/add_task.html")),
    ("edit_task.html", include_str!("../../templates/edit_task.html")),
];

/// Errors raised while building or rendering views.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A template failed to parse or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Compiled template environment.
#[derive(Debug)]
pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] when a template source fails to parse.
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a template to an HTML response.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] when rendering fails.
    pub fn render(&self, name: &str, ctx: impl Serialize) -> Result<Html<String>, ViewError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }

    /// Renders a template, degrading to the generic failure page on error.
    pub fn page(&self, name: &str, ctx: impl Serialize) -> Response {
        match self.render(name, ctx) {
            Ok(html) => html.into_response(),
            Err(err) => {
                tracing::error!(template = name, error = %err, "view rendering failed");
                internal_error()
            }
        }
    }
}

/// Generic failure response; internal detail never reaches the client.
#[must_use]
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<h1>Something went wrong.</h1>".to_owned()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::*;
    use minijinja::context;

    #[test]
    fn all_templates_compile() {
        ViewEngine::new().expect("embedded templates should compile");
    }

    #[test]
    fn login_template_renders_message_and_username() {
        let views = ViewEngine::new().expect("embedded templates should compile");
        let html = views
            .render(
                "login.html",
                context! { message => "Invalid username or password.", username => "alice" },
            )
            .expect("login template should render");
        assert!(html.0.contains("Invalid username or password."));
        assert!(html.0.contains("alice"));
    }

    #[test]
    fn dashboard_template_lists_tasks() {
        let views = ViewEngine::new().expect("embedded templates should compile");
        let html = views
            .render(
                "dashboard.html",
                context! {
                    user => context! { username => "alice" },
                    tasks => vec![
                        context! { id => "t1", title => "First", status => "pending" },
                        context! { id => "t2", title => "Second", status => "completed" },
                    ],
                },
            )
            .expect("dashboard template should render");
        assert!(html.0.contains("First"));
        assert!(html.0.contains("Second"));
    }
}
