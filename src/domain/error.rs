//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The stage group ordinal is outside the accepted range.
    #[error("invalid stage group {0}, expected a positive integer")]
    InvalidStageGroup(u32),

    /// The raw stage group input could not be parsed as an integer.
    #[error("unparsable stage group input '{0}', expected a positive integer")]
    UnparsableStageGroup(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}
