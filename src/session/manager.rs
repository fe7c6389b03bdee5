//! Session establishment, resolution, and renewal.

use super::{
    SessionClaims,
    config::{SessionConfig, SessionSecret},
    cookie,
};
use crate::identity::domain::Identity;
use mockable::Clock;
use std::sync::Arc;

/// Issues and verifies signed session cookies.
///
/// The manager holds the process-wide signing secret and cookie parameters,
/// both injected at construction. It is cheap to clone and shares its clock.
pub struct SessionManager<C>
where
    C: Clock + Send + Sync,
{
    config: SessionConfig,
    secret: SessionSecret,
    clock: Arc<C>,
}

// Manual impl: cloning shares the clock and must not require it to be
// `Clone` itself.
impl<C> Clone for SessionManager<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            secret: self.secret.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> SessionManager<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a session manager from cookie parameters and a signing secret.
    #[must_use]
    pub const fn new(config: SessionConfig, secret: SessionSecret, clock: Arc<C>) -> Self {
        Self {
            config,
            secret,
            clock,
        }
    }

    /// Returns the configured cookie name.
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// Establishes a session for an identity.
    ///
    /// Returns the `Set-Cookie` header value carrying the signed snapshot,
    /// valid for the configured absolute duration.
    #[must_use]
    pub fn establish(&self, identity: &Identity) -> String {
        let issued_at = self.clock.utc();
        let claims = SessionClaims::snapshot(
            identity,
            issued_at,
            issued_at + self.config.duration,
        );
        self.issue(&claims)
    }

    /// Resolves a session from a request `Cookie` header.
    ///
    /// Returns `None` when the cookie is absent, malformed, tampered, or
    /// expired.
    #[must_use]
    pub fn resolve(&self, cookie_header: Option<&str>) -> Option<SessionClaims> {
        let token = cookie::cookie_value(cookie_header?, &self.config.cookie_name)?;
        let payload = cookie::decode_token(token, &self.secret)?;
        let claims: SessionClaims = serde_json::from_slice(&payload).ok()?;
        if claims.is_expired_at(self.clock.utc()) {
            return None;
        }
        Some(claims)
    }

    /// Returns true when the claims are inside the renewal window: still
    /// valid, but with no more than the configured active window remaining.
    #[must_use]
    pub fn needs_renewal(&self, claims: &SessionClaims) -> bool {
        let now = self.clock.utc();
        !claims.is_expired_at(now) && claims.expires_at - now <= self.config.active_window
    }

    /// Re-issues the cookie with a fresh absolute expiry.
    #[must_use]
    pub fn renew(&self, claims: &SessionClaims) -> String {
        let issued_at = self.clock.utc();
        let renewed = SessionClaims {
            issued_at,
            expires_at: issued_at + self.config.duration,
            ..claims.clone()
        };
        self.issue(&renewed)
    }

    /// Returns a `Set-Cookie` header value that destroys the session.
    #[must_use]
    pub fn clearing_cookie(&self) -> String {
        cookie::build_clearing_cookie(&self.config)
    }

    fn issue(&self, claims: &SessionClaims) -> String {
        // Claims are a plain data struct; serialization cannot fail.
        let payload = serde_json::to_vec(claims).unwrap_or_default();
        let token = cookie::encode_token(&payload, &self.secret);
        cookie::build_set_cookie(&self.config, &token, self.config.duration.num_seconds())
    }
}
