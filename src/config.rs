//! Board configuration.

use crate::domain::StageGroup;
use serde::{Deserialize, Serialize};

/// Tunable defaults used when composing a new-task draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Persona tag applied when the form leaves the field blank.
    #[serde(default = "default_persona")]
    pub default_persona: String,
    /// Stage group a fresh draft starts in.
    #[serde(default = "default_initial_group")]
    pub initial_group: StageGroup,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_persona: default_persona(),
            initial_group: default_initial_group(),
        }
    }
}

fn default_persona() -> String {
    "Intern".to_owned()
}

const fn default_initial_group() -> StageGroup {
    StageGroup::TO_DO
}
