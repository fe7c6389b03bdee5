//! Stateless signed-cookie sessions.
//!
//! All session state travels in a tamper-evident cookie signed with a
//! server-held secret; there is no server-side session store. The cookie
//! carries an identity snapshot captured at login or registration, so
//! identity changes elsewhere never retroactively update an active session.
//!
//! Lifetime is sliding: a fixed absolute duration from issue, re-extended
//! when a request arrives inside the renewal window near expiry. Renewal is
//! therefore capped by inactivity, not by total session age.

mod config;
mod cookie;
mod manager;

pub use config::{SameSite, SessionConfig, SessionSecret};
pub use manager::SessionManager;

use crate::identity::domain::{Identity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity snapshot carried by a session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identifier of the authenticated user.
    pub user_id: UserId,
    /// Username at session establishment.
    pub username: String,
    /// Email address at session establishment.
    pub email: String,
    /// Time the token was issued or last renewed.
    pub issued_at: DateTime<Utc>,
    /// Absolute expiry; a token past this instant resolves to no identity.
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Captures a snapshot for the given identity and validity interval.
    #[must_use]
    pub fn snapshot(
        identity: &Identity,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: identity.id(),
            username: identity.username().as_str().to_owned(),
            email: identity.email().as_str().to_owned(),
            issued_at,
            expires_at,
        }
    }

    /// Returns true when the claims are expired at the given instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
