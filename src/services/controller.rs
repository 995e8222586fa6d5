//! Board controller orchestrating task lifecycle against the store.

use crate::config::BoardConfig;
use crate::domain::{
    BoardDomainError, BoardSnapshot, NewTask, NewTaskDraft, StageGroup, TaskId, TaskPatch,
    TaskTitle,
};
use crate::ports::TaskStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

/// Request payload for creating a task programmatically.
///
/// Omitted fields fall back to the board configuration when the request is
/// submitted, matching what the creation form does for blank inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    persona: Option<String>,
    group: Option<StageGroup>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            persona: None,
            group: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the persona tag.
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }

    /// Sets the initial stage group.
    #[must_use]
    pub const fn with_group(mut self, group: StageGroup) -> Self {
        self.group = Some(group);
        self
    }

    fn into_new_task(self, config: &BoardConfig) -> Result<NewTask, BoardDomainError> {
        let title = TaskTitle::new(self.title)?;
        let persona = self
            .persona
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| config.default_persona.clone());
        Ok(NewTask {
            title,
            description: self.description,
            persona,
            group: self.group.unwrap_or(config.initial_group),
        })
    }
}

/// Last successfully installed board state.
#[derive(Debug)]
struct BoardSlot {
    installed_seq: u64,
    snapshot: BoardSnapshot,
}

/// Orchestrates the task board against a [`TaskStore`].
///
/// The controller owns the installed [`BoardSnapshot`] and the new-task
/// draft. Store failures never escape its surface: each operation logs the
/// failure and leaves the previously installed snapshot in place, and a
/// mutation triggers a refresh only after the store reports success.
///
/// Refreshes carry a monotonically increasing sequence ticket; a refresh
/// result that arrives after a newer one has been installed is discarded,
/// so concurrent refreshes cannot roll the board back to older data.
pub struct BoardController<S> {
    store: Arc<S>,
    config: BoardConfig,
    board: RwLock<BoardSlot>,
    draft: Mutex<NewTaskDraft>,
    refresh_seq: AtomicU64,
}

impl<S> BoardController<S>
where
    S: TaskStore,
{
    /// Creates a controller whose board starts empty.
    ///
    /// The snapshot stays empty until the first [`refresh`](Self::refresh)
    /// or successful mutation.
    #[must_use]
    pub fn new(store: Arc<S>, config: BoardConfig) -> Self {
        let draft = NewTaskDraft::from_config(&config);
        Self {
            store,
            config,
            board: RwLock::new(BoardSlot {
                installed_seq: 0,
                snapshot: BoardSnapshot::default(),
            }),
            draft: Mutex::new(draft),
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the currently installed snapshot without touching the store.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.read_board().snapshot.clone()
    }

    /// Reloads the board from the store and returns the installed snapshot.
    ///
    /// On store failure the previous snapshot is kept and returned.
    pub async fn refresh(&self) -> BoardSnapshot {
        self.reload().await;
        self.snapshot()
    }

    /// Moves a task into the In Progress column.
    pub async fn advance_to_in_progress(&self, id: TaskId) {
        let patch = TaskPatch::group(StageGroup::IN_PROGRESS);
        match self.store.update(id, patch).await {
            Ok(()) => self.reload().await,
            Err(err) => tracing::warn!(%id, error = %err, "failed to advance task"),
        }
    }

    /// Marks one task as completed by identifier.
    pub async fn complete(&self, id: TaskId) {
        match self.store.complete(id).await {
            Ok(()) => self.reload().await,
            Err(err) => tracing::warn!(%id, error = %err, "failed to complete task"),
        }
    }

    /// Marks every active task bearing exactly this title as completed.
    ///
    /// Titles are not unique, so this sweeps duplicates in one call; prefer
    /// [`complete`](Self::complete) when the identifier is known.
    pub async fn complete_all_titled(&self, title: &str) {
        let validated = match TaskTitle::new(title) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "rejected bulk completion");
                return;
            }
        };
        match self.store.complete_titled(&validated).await {
            Ok(changed) => {
                tracing::debug!(title = %validated, changed, "bulk completion applied");
                self.reload().await;
            }
            Err(err) => {
                tracing::warn!(title = %validated, error = %err, "failed bulk completion");
            }
        }
    }

    /// Creates a task from an explicit request.
    pub async fn create(&self, request: CreateTaskRequest) {
        match request.into_new_task(&self.config) {
            Ok(new_task) => {
                if self.persist(new_task).await {
                    self.reload().await;
                }
            }
            Err(err) => tracing::warn!(error = %err, "rejected task creation"),
        }
    }

    /// Submits the current draft as a new task.
    ///
    /// The draft resets to its baseline only after the store accepts the
    /// task, so a failed submission keeps the operator's input intact.
    pub async fn submit_draft(&self) {
        let pending = self.lock_draft().to_new_task(&self.config);
        match pending {
            Ok(new_task) => {
                if self.persist(new_task).await {
                    self.reset_draft();
                    self.reload().await;
                }
            }
            Err(err) => tracing::warn!(error = %err, "rejected draft submission"),
        }
    }

    /// Permanently removes a task from the board.
    pub async fn remove(&self, id: TaskId) {
        match self.store.delete(id).await {
            Ok(()) => self.reload().await,
            Err(err) => tracing::warn!(%id, error = %err, "failed to delete task"),
        }
    }

    /// Returns a copy of the current new-task draft.
    #[must_use]
    pub fn draft(&self) -> NewTaskDraft {
        self.lock_draft().clone()
    }

    /// Absorbs a raw title edit into the draft.
    pub fn set_draft_title(&self, title: impl Into<String>) {
        self.lock_draft().set_title(title);
    }

    /// Absorbs a raw description edit into the draft.
    pub fn set_draft_description(&self, description: impl Into<String>) {
        self.lock_draft().set_description(description);
    }

    /// Absorbs a raw persona edit into the draft.
    pub fn set_draft_persona(&self, persona: impl Into<String>) {
        self.lock_draft().set_persona(persona);
    }

    /// Coerces a raw numeric form input into the draft's stage group.
    ///
    /// Invalid input leaves the previously selected ordinal in place.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardDomainError`] produced by [`StageGroup::parse`]
    /// when the input is not a positive integer in range.
    pub fn set_draft_group_input(&self, raw: &str) -> Result<(), BoardDomainError> {
        self.lock_draft().set_group_input(raw)
    }

    /// Resets the draft to the configured baseline.
    pub fn reset_draft(&self) {
        *self.lock_draft() = NewTaskDraft::from_config(&self.config);
    }

    async fn persist(&self, new_task: NewTask) -> bool {
        match self.store.create(new_task).await {
            Ok(task) => {
                tracing::debug!(id = %task.id(), "task created");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to create task");
                false
            }
        }
    }

    async fn reload(&self) {
        let ticket = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let active = match self.store.list_active().await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, "board refresh failed");
                return;
            }
        };
        let completed = match self.store.list_completed().await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, "board refresh failed");
                return;
            }
        };
        self.install(ticket, BoardSnapshot::partition(active, completed));
    }

    fn install(&self, ticket: u64, snapshot: BoardSnapshot) {
        let mut slot = self.board.write().unwrap_or_else(PoisonError::into_inner);
        if ticket <= slot.installed_seq {
            tracing::debug!(ticket, installed = slot.installed_seq, "discarding stale refresh");
            return;
        }
        slot.installed_seq = ticket;
        slot.snapshot = snapshot;
    }

    // Poisoned locks still hold coherent state; keep serving it.
    fn read_board(&self) -> RwLockReadGuard<'_, BoardSlot> {
        self.board.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_draft(&self) -> MutexGuard<'_, NewTaskDraft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
