//! Service-level errors and their coarse classification.

use crate::task::{
    domain::{TaskCode, TaskDomainError, UserCode},
    ports::{TaskLogRepositoryError, TaskRepositoryError, UserRepositoryError},
};
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The referenced user is not registered.
    #[error("user {0} does not exist, specify an existing user code")]
    UserNotFound(UserCode),

    /// The referenced task does not exist.
    #[error("task {0} does not exist, specify an existing task code")]
    TaskNotFound(TaskCode),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// User registry lookup failed.
    #[error(transparent)]
    UserDirectory(#[from] UserRepositoryError),

    /// An audit log operation for the task failed.
    ///
    /// When raised by a mutating operation the task change has already been
    /// persisted and is not rolled back.
    #[error("audit log operation for task {task_code} failed: {source}")]
    AuditLog {
        /// Task whose audit trail is affected.
        task_code: TaskCode,
        /// Underlying log repository failure.
        source: TaskLogRepositoryError,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Coarse error classification reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced user or task code does not exist.
    ReferenceNotFound,
    /// The requested change violates the status lifecycle.
    InvalidTransition,
    /// The request carried malformed or conflicting values.
    InvalidInput,
    /// A store failed.
    Storage,
}

impl ErrorKind {
    /// Returns a stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReferenceNotFound => "reference_not_found",
            Self::InvalidTransition => "invalid_transition",
            Self::InvalidInput => "invalid_input",
            Self::Storage => "storage",
        }
    }
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::TaskNotFound(_)
            | Self::Repository(TaskRepositoryError::NotFound(_)) => ErrorKind::ReferenceNotFound,
            Self::Domain(
                TaskDomainError::InvalidStatusTransition { .. }
                | TaskDomainError::TaskNotCompleted { .. },
            ) => ErrorKind::InvalidTransition,
            Self::Domain(TaskDomainError::EmptyTaskName)
            | Self::Repository(TaskRepositoryError::DuplicateTask(_)) => ErrorKind::InvalidInput,
            Self::Repository(TaskRepositoryError::Persistence(_))
            | Self::UserDirectory(_)
            | Self::AuditLog { .. } => ErrorKind::Storage,
        }
    }
}
