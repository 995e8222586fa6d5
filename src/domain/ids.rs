//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are positive integers assigned by the task store at creation
/// time. They are never reused and never change for the lifetime of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, BoardDomainError> {
        if value <= 0 {
            return Err(BoardDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive workflow stage ordinal.
///
/// Ordinal `1` is the To Do stage; any higher ordinal counts as In Progress
/// on the board. Ordinals above `2` are accepted and collapse into the same
/// In Progress partition without further distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageGroup(u32);

impl StageGroup {
    /// Ordinal of the To Do stage.
    pub const TO_DO: Self = Self(1);

    /// Ordinal a task is moved to when it enters the In Progress column.
    pub const IN_PROGRESS: Self = Self(2);

    /// Largest ordinal representable in the current `PostgreSQL` schema.
    const MAX_PERSISTED_VALUE: u32 = i32::MAX as u32;

    /// Creates a validated stage group ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStageGroup`] when the value is zero
    /// or exceeds the schema-backed maximum (`i32::MAX`).
    pub const fn new(value: u32) -> Result<Self, BoardDomainError> {
        if value == 0 || value > Self::MAX_PERSISTED_VALUE {
            return Err(BoardDomainError::InvalidStageGroup(value));
        }
        Ok(Self(value))
    }

    /// Coerces raw form input into a stage group ordinal.
    ///
    /// Leading and trailing whitespace is ignored. Anything that does not
    /// parse as a positive integer is rejected rather than silently mangled.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnparsableStageGroup`] when the input is
    /// not an integer, or [`BoardDomainError::InvalidStageGroup`] when the
    /// parsed value is out of range.
    pub fn parse(input: &str) -> Result<Self, BoardDomainError> {
        let value = input
            .trim()
            .parse::<u32>()
            .map_err(|_| BoardDomainError::UnparsableStageGroup(input.to_owned()))?;
        Self::new(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
