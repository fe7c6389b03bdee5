//! Diesel row models and the JSONB identity document.

use super::schema::accounts;
use crate::identity::domain::PasswordHash;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSONB payload persisted per account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// Account username.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Salted password hash in PHC string format.
    pub password_hash: PasswordHash,
}

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Indexed username.
    pub username: String,
    /// Indexed email address.
    pub email: String,
    /// Identity document payload.
    pub document: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Indexed username.
    pub username: String,
    /// Indexed email address.
    pub email: String,
    /// Identity document payload.
    pub document: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
