//! `PostgreSQL` credential store implementation.

use super::{
    models::{AccountRow, IdentityDocument, NewAccountRow},
    schema::accounts,
};
use crate::identity::{
    domain::{EmailAddress, Identity, PersistedIdentityData, UserId, Username},
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by identity adapters.
pub type CredentialPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed credential store.
#[derive(Debug, Clone)]
pub struct PostgresCredentialStore {
    pool: CredentialPgPool,
}

impl PostgresCredentialStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CredentialPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CredentialStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CredentialStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CredentialStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CredentialStoreError::persistence)?
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn store(&self, identity: &Identity) -> CredentialStoreResult<()> {
        let username = identity.username().clone();
        let email = identity.email().clone();
        let new_row = to_new_row(identity).map_err(CredentialStoreError::persistence)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        CredentialStoreError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CredentialStoreError::DuplicateUsername(username.clone())
                    }
                    _ => CredentialStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> CredentialStoreResult<Option<Identity>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::username.eq(lookup))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(CredentialStoreError::persistence)?;
            row.map(row_to_identity).transpose()
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CredentialStoreResult<Option<Identity>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::email.eq(lookup))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(CredentialStoreError::persistence)?;
            row.map(row_to_identity).transpose()
        })
        .await
    }
}

/// Distinguishes the email unique index from the username one.
fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name.contains("email"))
}

fn to_new_row(identity: &Identity) -> Result<NewAccountRow, serde_json::Error> {
    let document = serde_json::to_value(IdentityDocument {
        username: identity.username().as_str().to_owned(),
        email: identity.email().as_str().to_owned(),
        password_hash: identity.password_hash().clone(),
    })?;

    Ok(NewAccountRow {
        id: identity.id().into_inner(),
        username: identity.username().as_str().to_owned(),
        email: identity.email().as_str().to_owned(),
        document,
        created_at: identity.created_at(),
    })
}

fn row_to_identity(row: AccountRow) -> CredentialStoreResult<Identity> {
    let document = serde_json::from_value::<IdentityDocument>(row.document)
        .map_err(CredentialStoreError::persistence)?;
    let username =
        Username::new(document.username).map_err(CredentialStoreError::persistence)?;
    let email = EmailAddress::new(document.email).map_err(CredentialStoreError::persistence)?;

    Ok(Identity::from_persisted(PersistedIdentityData {
        id: UserId::from_uuid(row.id),
        username,
        email,
        password_hash: document.password_hash,
        created_at: row.created_at,
    }))
}
