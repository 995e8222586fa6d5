//! Task record and derived board status.

use super::{BoardDomainError, StageGroup, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty task title.
///
/// The title doubles as the key for bulk completion, so it is normalized
/// (trimmed) at construction to keep matching predictable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Board status derived from a task's stage group and completion flag.
///
/// The status is computed once at the store boundary so downstream logic
/// never re-derives it from the two raw fields. Completion takes precedence
/// over the stage group value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task sits in the To Do column (stage group 1).
    ToDo,
    /// The task sits in the In Progress column (stage group above 1).
    InProgress {
        /// Stage ordinal the task currently occupies. Ordinals above 2 are
        /// kept, but the board does not distinguish between them.
        stage: StageGroup,
    },
    /// The task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress { .. } => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when no further transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task record.
///
/// Tasks are minted by the task store, which assigns the identifier and the
/// audit timestamps; the domain only ever reconstructs them from persisted
/// data and applies validated mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    persona: String,
    group: StageGroup,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, possibly empty.
    pub description: String,
    /// Persisted persona tag.
    pub persona: String,
    /// Persisted stage group ordinal.
    pub group: StageGroup,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            persona: data.persona,
            group: data.group,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the persona tag.
    #[must_use]
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Returns the stage group ordinal.
    #[must_use]
    pub const fn group(&self) -> StageGroup {
        self.group
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Derives the board status from the completion flag and stage group.
    ///
    /// Completion wins over the group value, so a completed task never
    /// resurfaces in To Do or In Progress regardless of its ordinal.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else if self.group.value() == StageGroup::TO_DO.value() {
            TaskStatus::ToDo
        } else {
            TaskStatus::InProgress { stage: self.group }
        }
    }

    /// Applies a partial field update and stamps the mutation time.
    ///
    /// Fields absent from the patch are left untouched. The identifier and
    /// the completion flag are not patchable; completion has its own
    /// dedicated operation.
    pub fn apply_patch(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        if let Some(group) = patch.group {
            self.group = group;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(persona) = &patch.persona {
            self.persona.clone_from(persona);
        }
        self.touch(clock);
    }

    /// Marks the task completed and stamps the mutation time.
    ///
    /// Completing an already-completed task is accepted and simply
    /// re-asserts the flag.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validated payload for creating a task through the store.
///
/// The store assigns the identifier, the timestamps, and the initial
/// `completed = false` flag; everything else is supplied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Title of the task to create.
    pub title: TaskTitle,
    /// Description, possibly empty.
    pub description: String,
    /// Persona tag.
    pub persona: String,
    /// Initial stage group ordinal.
    pub group: StageGroup,
}
