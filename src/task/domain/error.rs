//! Error types for task domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The requested status is not exactly one step ahead of the current
    /// status.
    #[error(
        "invalid status transition for task {task_code}: {} -> {}, the requested status must be exactly one step ahead of the current status",
        .from.as_str(),
        .to.as_str()
    )]
    InvalidStatusTransition {
        /// Task being transitioned.
        task_code: TaskCode,
        /// Status before the attempted transition.
        from: TaskStatus,
        /// Requested target status.
        to: TaskStatus,
    },

    /// The task has not reached the done status and cannot be removed.
    #[error("task {task_code} is {} and can only be deleted once done", .status.label())]
    TaskNotCompleted {
        /// Task that was to be deleted.
        task_code: TaskCode,
        /// Current status of the task.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
