//! Session cookie configuration and the signing secret.

use chrono::Duration;
use std::fmt;

/// Server-held secret used to sign session cookies.
///
/// Loaded once at process start and immutable thereafter. `Debug` and
/// `Display` output is redacted so the secret cannot leak through logs.
#[derive(Clone)]
pub struct SessionSecret(String);

impl SessionSecret {
    /// Shortest accepted secret length in bytes.
    pub const MIN_LENGTH: usize = 32;

    /// Wraps a secret value.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the secret for signing. Use only at the HMAC boundary.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns the secret length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret([REDACTED])")
    }
}

impl fmt::Display for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// `SameSite` attribute values for the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    /// Never sent cross-site.
    Strict,
    /// Sent on top-level cross-site navigation. The default, so form posts
    /// following an external link still carry the session.
    #[default]
    Lax,
}

impl SameSite {
    /// Returns the attribute value as written into the `Set-Cookie` header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
        }
    }
}

/// Session cookie parameters.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie name.
    pub cookie_name: String,
    /// Cookie path attribute.
    pub cookie_path: String,
    /// Whether to set the `Secure` attribute.
    pub cookie_secure: bool,
    /// Whether to set the `HttpOnly` attribute.
    pub cookie_http_only: bool,
    /// `SameSite` attribute.
    pub cookie_same_site: SameSite,
    /// Absolute session lifetime from issue or renewal.
    pub duration: Duration,
    /// Window before expiry during which activity renews the session.
    pub active_window: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "taskboard_session".to_owned(),
            cookie_path: "/".to_owned(),
            cookie_secure: false,
            cookie_http_only: true,
            cookie_same_site: SameSite::default(),
            duration: Duration::minutes(30),
            active_window: Duration::minutes(5),
        }
    }
}
