//! New-task draft state absorbed from the creation form.

use super::{BoardDomainError, NewTask, StageGroup, TaskTitle};
use crate::config::BoardConfig;
use serde::{Deserialize, Serialize};

/// Working state of the new-task creation form.
///
/// The draft holds raw field edits exactly as supplied until submission;
/// only the stage group is coerced eagerly because the form input arrives
/// as text. Title validation happens at submission, when the draft is
/// turned into a [`NewTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskDraft {
    title: String,
    description: String,
    persona: String,
    group: StageGroup,
}

impl NewTaskDraft {
    /// Creates the baseline draft the creation form starts from and resets
    /// to after a successful submission.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            persona: config.default_persona.clone(),
            group: config.initial_group,
        }
    }

    /// Returns the raw title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw persona text.
    #[must_use]
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Returns the currently selected stage group.
    #[must_use]
    pub const fn group(&self) -> StageGroup {
        self.group
    }

    /// Absorbs a raw title edit.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Absorbs a raw description edit.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Absorbs a raw persona edit.
    pub fn set_persona(&mut self, persona: impl Into<String>) {
        self.persona = persona.into();
    }

    /// Coerces a raw numeric form input into the stage group field.
    ///
    /// Invalid input leaves the previously selected ordinal in place.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardDomainError`] produced by [`StageGroup::parse`]
    /// when the input is not a positive integer.
    pub fn set_group_input(&mut self, raw: &str) -> Result<(), BoardDomainError> {
        self.group = StageGroup::parse(raw)?;
        Ok(())
    }

    /// Validates the draft into a creation payload.
    ///
    /// A blank persona counts as omitted and falls back to the configured
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn to_new_task(&self, config: &BoardConfig) -> Result<NewTask, BoardDomainError> {
        let title = TaskTitle::new(self.title.as_str())?;
        let persona = if self.persona.trim().is_empty() {
            config.default_persona.clone()
        } else {
            self.persona.clone()
        };
        Ok(NewTask {
            title,
            description: self.description.clone(),
            persona,
            group: self.group,
        })
    }
}

impl Default for NewTaskDraft {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
