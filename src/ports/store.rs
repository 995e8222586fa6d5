//! Store port for task persistence, listing, and lifecycle mutations.

use crate::domain::{NewTask, Task, TaskId, TaskPatch, TaskTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The store is the external collaborator that owns durable task state. It
/// partitions tasks into active and completed listings itself, assigns
/// identifiers and audit timestamps at creation time, and applies lifecycle
/// mutations. Listings are returned in ascending identifier order.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all tasks with `completed == false`, ascending by id.
    async fn list_active(&self) -> TaskStoreResult<Vec<Task>>;

    /// Returns all tasks with `completed == true`, ascending by id.
    async fn list_completed(&self) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new task, assigning its identifier and timestamps and
    /// setting `completed = false`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the task cannot be
    /// stored.
    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial field update to an existing task.
    ///
    /// An empty patch is accepted as a no-op; implementations return
    /// success without consulting the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when a non-empty patch targets
    /// a task that does not exist.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<()>;

    /// Marks the task with the given identifier as completed.
    ///
    /// Completing an already-completed task is accepted and re-asserts the
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn complete(&self, id: TaskId) -> TaskStoreResult<()>;

    /// Marks every not-yet-completed task bearing exactly this title as
    /// completed, returning how many tasks changed.
    ///
    /// Matching zero tasks is a successful no-op, not an error; titles are
    /// not unique, so this is an explicitly bulk operation.
    async fn complete_titled(&self, title: &TaskTitle) -> TaskStoreResult<usize>;

    /// Permanently removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
