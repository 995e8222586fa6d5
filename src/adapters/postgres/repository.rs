//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::domain::{NewTask, PersistedTaskData, StageGroup, Task, TaskId, TaskPatch, TaskTitle};
use crate::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
///
/// Identifiers come from the table's `BIGSERIAL` sequence; audit timestamps
/// are stamped from the store's clock rather than database defaults so they
/// stay controllable in tests.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore<C = DefaultClock> {
    pool: BoardPgPool,
    clock: Arc<C>,
}

impl PostgresTaskStore<DefaultClock> {
    /// Creates a store from a `PostgreSQL` connection pool, stamping
    /// timestamps from the system clock.
    #[must_use]
    pub fn new(pool: BoardPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<C> PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store stamping timestamps from the given clock.
    #[must_use]
    pub const fn with_clock(pool: BoardPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
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

    async fn list_where(&self, completed: bool) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::completed.eq(completed))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

#[async_trait]
impl<C> TaskStore for PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list_active(&self) -> TaskStoreResult<Vec<Task>> {
        self.list_where(false).await
    }

    async fn list_completed(&self) -> TaskStoreResult<Vec<Task>> {
        self.list_where(true).await
    }

    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let new_row = to_new_row(new_task, self.clock.utc())?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let changeset = to_changeset(patch, self.clock.utc())?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            require_found(affected, id)
        })
        .await
    }

    async fn complete(&self, id: TaskId) -> TaskStoreResult<()> {
        let now = self.clock.utc();
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set((tasks::completed.eq(true), tasks::updated_at.eq(now)))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            require_found(affected, id)
        })
        .await
    }

    async fn complete_titled(&self, title: &TaskTitle) -> TaskStoreResult<usize> {
        let now = self.clock.utc();
        let title_value = title.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::update(
                tasks::table
                    .filter(tasks::title.eq(title_value))
                    .filter(tasks::completed.eq(false)),
            )
            .set((tasks::completed.eq(true), tasks::updated_at.eq(now)))
            .execute(connection)
            .map_err(TaskStoreError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            require_found(affected, id)
        })
        .await
    }
}

const fn require_found(affected: usize, id: TaskId) -> TaskStoreResult<()> {
    if affected == 0 {
        return Err(TaskStoreError::NotFound(id));
    }
    Ok(())
}

fn stage_group_column(group: StageGroup) -> TaskStoreResult<i32> {
    i32::try_from(group.value()).map_err(TaskStoreError::persistence)
}

fn to_new_row(new_task: NewTask, now: DateTime<Utc>) -> TaskStoreResult<NewTaskRow> {
    let stage_group = stage_group_column(new_task.group)?;
    Ok(NewTaskRow {
        title: new_task.title.into_inner(),
        description: new_task.description,
        persona: new_task.persona,
        stage_group,
        completed: false,
        created_at: now,
        updated_at: now,
    })
}

fn to_changeset(patch: TaskPatch, now: DateTime<Utc>) -> TaskStoreResult<TaskChangeset> {
    let stage_group = patch.group.map(stage_group_column).transpose()?;
    Ok(TaskChangeset {
        title: patch.title.map(TaskTitle::into_inner),
        description: patch.description,
        persona: patch.persona,
        stage_group,
        updated_at: now,
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let id = TaskId::new(row.id).map_err(TaskStoreError::persistence)?;
    let title = TaskTitle::new(row.title).map_err(TaskStoreError::persistence)?;
    let group_value = u32::try_from(row.stage_group).map_err(TaskStoreError::persistence)?;
    let group = StageGroup::new(group_value).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id,
        title,
        description: row.description,
        persona: row.persona,
        group,
        completed: row.completed,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
