//! Error types for task draft validation and due date parsing.

use thiserror::Error;

/// Errors returned while validating raw task input at the host boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDraftError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No due date was supplied.
    #[error("task due date is required")]
    MissingDueDate,

    /// The due date is not a valid `YYYY-MM-DD` calendar date.
    #[error(transparent)]
    InvalidDueDate(#[from] ParseDueDateError),
}

/// Error returned while parsing a due date from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date '{0}', expected YYYY-MM-DD")]
pub struct ParseDueDateError(pub String);
