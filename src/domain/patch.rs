//! Partial field update for an existing task.

use super::{StageGroup, TaskTitle};
use serde::{Deserialize, Serialize};

/// Partial update applied to a stored task.
///
/// Every field is optional; absent fields are left untouched. The task
/// identifier is immutable and the completion flag is excluded on purpose:
/// completion is a dedicated store operation, not a generic update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New stage group ordinal, if the task is being moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<StageGroup>,
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TaskTitle>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement persona tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

impl TaskPatch {
    /// Creates a patch that only moves the task to the given stage group.
    #[must_use]
    pub const fn group(group: StageGroup) -> Self {
        Self {
            group: Some(group),
            title: None,
            description: None,
            persona: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement persona tag.
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }

    /// Returns `true` when the patch changes nothing.
    ///
    /// Stores accept empty patches as no-ops without consulting the task,
    /// so an empty patch cannot be used as an existence probe.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.persona.is_none()
    }
}
