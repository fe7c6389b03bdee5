//! Shared application state handed to every handler.

use crate::identity::{ports::CredentialStore, services::AccountService};
use crate::session::SessionManager;
use crate::tasks::{ports::TaskStore, services::TaskLifecycleService};
use crate::web::views::ViewEngine;
use mockable::Clock;
use std::sync::Arc;

/// Application state: services, session manager, and view engine.
///
/// Parameterised over the two store ports and the clock so tests can run the
/// full router against in-memory adapters and a fixed clock.
pub struct AppState<U, T, C>
where
    U: CredentialStore,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Registration and login service.
    pub accounts: AccountService<U, C>,
    /// Owner-scoped task service.
    pub tasks: TaskLifecycleService<T, C>,
    /// Signed-cookie session manager.
    pub sessions: SessionManager<C>,
    /// Template renderer.
    pub views: Arc<ViewEngine>,
}

impl<U, T, C> AppState<U, T, C>
where
    U: CredentialStore,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates application state from its collaborators.
    #[must_use]
    pub const fn new(
        accounts: AccountService<U, C>,
        tasks: TaskLifecycleService<T, C>,
        sessions: SessionManager<C>,
        views: Arc<ViewEngine>,
    ) -> Self {
        Self {
            accounts,
            tasks,
            sessions,
            views,
        }
    }
}

// Manual impl: the services share inner `Arc`s, so cloning does not require
// the store types themselves to be `Clone`.
impl<U, T, C> Clone for AppState<U, T, C>
where
    U: CredentialStore,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            tasks: self.tasks.clone(),
            sessions: self.sessions.clone(),
            views: Arc::clone(&self.views),
        }
    }
}
