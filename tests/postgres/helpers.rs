//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::ManagedCluster;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use taskboard::adapters::postgres::PostgresTaskStore;
use taskboard::domain::{NewTask, StageGroup, TaskTitle};
use tokio::runtime::Runtime;

/// SQL to create the tasks schema for tests.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-08-18-000000_create_tasks/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Builds a runtime for driving async store calls from synchronous tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be constructed.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &ManagedCluster) -> Result<(), BoxError> {
    let connection = cluster.connection();
    cluster.ensure_template_exists(TEMPLATE_DB, move |db_name| {
        apply_migrations(&connection.database_url(db_name))
    })
}

/// Applies the tasks schema to the database at the given URL.
fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Creates a test database from the template and builds a store on it.
///
/// # Errors
///
/// Returns an error if database creation or pool construction fails.
pub fn setup_store(cluster: &ManagedCluster, db_name: &str) -> Result<PostgresTaskStore, BoxError> {
    cluster.create_database_from_template(db_name, TEMPLATE_DB)?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(PostgresTaskStore::new(pool))
}

/// Drops the per-test database once the owning test completes.
pub struct CleanupGuard<'a> {
    cluster: &'a ManagedCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Registers a database for cleanup.
    #[must_use]
    pub const fn new(cluster: &'a ManagedCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }

    /// Drops the registered database.
    ///
    /// # Errors
    ///
    /// Returns an error when the drop statement fails.
    pub fn cleanup(self) -> Result<(), BoxError> {
        self.cluster.drop_database(&self.db_name)
    }
}

/// Builds a persistable task payload for store tests.
///
/// # Errors
///
/// Returns an error when the title fails validation.
pub fn new_task(title: &str, group: StageGroup) -> Result<NewTask, BoxError> {
    Ok(NewTask {
        title: TaskTitle::new(title).map_err(|err| Box::new(err) as BoxError)?,
        description: String::from("integration test card"),
        persona: String::from("Intern"),
        group,
    })
}
