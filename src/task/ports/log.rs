//! Append-only port for the task audit log.

use crate::task::domain::{LogEntry, TaskCode};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log operations.
pub type TaskLogRepositoryResult<T> = Result<T, TaskLogRepositoryError>;

/// Audit log persistence contract.
///
/// Entries are never updated. They are only removed together with the task
/// they describe.
#[async_trait]
pub trait TaskLogRepository: Send + Sync {
    /// Appends an entry to the log.
    async fn append(&self, entry: &LogEntry) -> TaskLogRepositoryResult<()>;

    /// Returns the entries recorded for a task in append order.
    async fn find_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<Vec<LogEntry>>;

    /// Removes every entry recorded for a task and returns how many were
    /// removed.
    async fn delete_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<usize>;
}

/// Errors returned by audit log implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskLogRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskLogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
