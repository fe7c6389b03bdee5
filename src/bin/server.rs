//! Taskboard HTTP server.
//!
//! Loads configuration from the environment (a `.env` file is honoured in
//! development), connects to `PostgreSQL`, and serves the web application.
//!
//! Required environment variables:
//!
//! - `DATABASE_URL`: `PostgreSQL` connection string
//! - `SESSION_SECRET`: session-cookie signing secret, at least 32 bytes
//!
//! Optional:
//!
//! - `BIND_ADDR`: listen address, defaults to `127.0.0.1:3000`

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::AppConfig;
use taskboard::identity::adapters::PostgresCredentialStore;
use taskboard::identity::services::AccountService;
use taskboard::session::{SessionConfig, SessionManager};
use taskboard::tasks::adapters::PostgresTaskStore;
use taskboard::tasks::services::TaskLifecycleService;
use taskboard::web::views::ViewEngine;
use taskboard::web::{AppState, router};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let clock = Arc::new(DefaultClock);
    let credentials = Arc::new(PostgresCredentialStore::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskStore::new(pool));

    let state = AppState::new(
        AccountService::new(credentials, Arc::clone(&clock)),
        TaskLifecycleService::new(tasks, Arc::clone(&clock)),
        SessionManager::new(SessionConfig::default(), config.session_secret, clock),
        Arc::new(ViewEngine::new()?),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
