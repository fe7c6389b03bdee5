//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskRow, TaskRow, TaskRowChanges},
    schema::tasks,
};
use crate::identity::domain::UserId;
use crate::tasks::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::DuplicateTask(task_id)
                    }
                    _ => TaskStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(
                    tasks::id
                        .eq(id.into_inner())
                        .and(tasks::owner_id.eq(owner.into_inner())),
                )
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_for_owner(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let owner = task.owner();
        let changes = TaskRowChanges {
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table.filter(
                    tasks::id
                        .eq(task_id.into_inner())
                        .and(tasks::owner_id.eq(owner.into_inner())),
                ),
            )
            .set(&changes)
            .execute(connection)
            .map_err(TaskStoreError::persistence)?;

            if affected == 0 {
                return Err(TaskStoreError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                tasks::table.filter(
                    tasks::id
                        .eq(id.into_inner())
                        .and(tasks::owner_id.eq(owner.into_inner())),
                ),
            )
            .execute(connection)
            .map_err(TaskStoreError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        owner: UserId::from_uuid(row.owner_id),
        title: row.title,
        description: row.description,
        due_date: row.due_date,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
