//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskCode};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract, keyed by task code.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task. No ordering is guaranteed.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by its code.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task code
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same code already exists.
    #[error("duplicate task code: {0}")]
    DuplicateTask(TaskCode),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskCode),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
