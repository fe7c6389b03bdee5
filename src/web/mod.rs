//! Server-rendered HTTP surface.
//!
//! Form-post based routing over Axum: session resolution and renewal run as
//! a layer ahead of every route, guard extractors gate route groups, and
//! handlers delegate to the identity and task services before rendering a
//! minijinja view or redirecting.

pub mod forms;
pub mod guards;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::router;
pub use state::AppState;
