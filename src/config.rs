//! Process configuration loaded once at startup.

use crate::session::SessionSecret;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The bind address could not be parsed.
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),

    /// The session secret is shorter than the accepted minimum.
    #[error("session secret must be at least {0} bytes")]
    WeakSessionSecret(usize),
}

/// Application configuration.
///
/// Loaded once at process start and immutable thereafter; the session
/// secret is injected into the session manager rather than read ad hoc.
#[derive(Debug)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Session-cookie signing secret.
    pub session_secret: SessionSecret,
}

impl AppConfig {
    /// Default bind address when `BIND_ADDR` is unset.
    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:3000";

    /// Loads configuration from environment variables.
    ///
    /// Reads `DATABASE_URL`, `SESSION_SECRET`, and optionally `BIND_ADDR`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing, the
    /// bind address fails to parse, or the session secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let secret = require_var("SESSION_SECRET")?;
        if secret.len() < SessionSecret::MIN_LENGTH {
            return Err(ConfigError::WeakSessionSecret(SessionSecret::MIN_LENGTH));
        }

        let bind_raw =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw))?;

        Ok(Self {
            database_url,
            bind_addr,
            session_secret: SessionSecret::new(secret),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
