//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The estimated complexity is outside the 1..=5 range.
    #[error("estimated complexity must be between 1 and 5, got {0}")]
    InvalidComplexity(u8),

    /// The due date lies before the creation instant.
    #[error("due date {due_date} must not be in the past (now: {now})")]
    DueDateInPast {
        /// Requested due date.
        due_date: DateTime<Utc>,
        /// Clock reading at validation time.
        now: DateTime<Utc>,
    },

    /// The page number is below 1.
    #[error("page number must be at least 1, got {0}")]
    InvalidPageNumber(u32),

    /// The page size is outside the 1..=100 range.
    #[error("page size must be between 1 and 100, got {0}")]
    InvalidPageSize(u32),
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("status must be ToDo, InProgress, Blocked or Completed, got '{0}'")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("priority must be Low, Medium or High, got '{0}'")]
pub struct ParseTaskPriorityError(pub String);
