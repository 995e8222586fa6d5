//! In-memory task store for tests and ephemeral boards.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskTitle};
use crate::ports::{TaskStore, TaskStoreError, TaskStoreResult};

/// Thread-safe in-memory task store.
///
/// Assigns sequential identifiers starting at 1 and stamps audit timestamps
/// from the supplied clock, mirroring what a database-backed store does.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore<C = DefaultClock> {
    state: Arc<RwLock<InMemoryBoardState>>,
    clock: Arc<C>,
}

#[derive(Debug)]
struct InMemoryBoardState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryBoardState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping timestamps from the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState::default())),
            clock,
        }
    }

    fn read_state(&self) -> TaskStoreResult<std::sync::RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn list_where(&self, completed: bool) -> TaskStoreResult<Vec<Task>> {
        let state = self.read_state()?;
        // BTreeMap iteration yields ascending identifier order.
        Ok(state
            .tasks
            .values()
            .filter(|task| task.is_completed() == completed)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list_active(&self) -> TaskStoreResult<Vec<Task>> {
        self.list_where(false)
    }

    async fn list_completed(&self) -> TaskStoreResult<Vec<Task>> {
        self.list_where(true)
    }

    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.write_state()?;
        let id = TaskId::new(state.next_id).map_err(TaskStoreError::persistence)?;
        state.next_id += 1;

        let now = self.clock.utc();
        let task = Task::from_persisted(PersistedTaskData {
            id,
            title: new_task.title,
            description: new_task.description,
            persona: new_task.persona,
            group: new_task.group,
            completed: false,
            created_at: now,
            updated_at: now,
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply_patch(&patch, self.clock.as_ref());
        Ok(())
    }

    async fn complete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.mark_completed(self.clock.as_ref());
        Ok(())
    }

    async fn complete_titled(&self, title: &TaskTitle) -> TaskStoreResult<usize> {
        let mut state = self.write_state()?;
        let mut changed = 0;
        for task in state.tasks.values_mut() {
            if !task.is_completed() && task.title() == title {
                task.mark_completed(self.clock.as_ref());
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(id))
    }
}
