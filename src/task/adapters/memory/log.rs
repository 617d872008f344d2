//! In-memory audit log.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{LogEntry, TaskCode},
    ports::{TaskLogRepository, TaskLogRepositoryError, TaskLogRepositoryResult},
};

/// Thread-safe append-only in-memory audit log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskLogRepository {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl InMemoryTaskLogRepository {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every entry in append order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogRepositoryError::Persistence`] when the log lock is
    /// poisoned.
    pub fn entries(&self) -> TaskLogRepositoryResult<Vec<LogEntry>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(entries.clone())
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskLogRepositoryError {
    TaskLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskLogRepository for InMemoryTaskLogRepository {
    async fn append(&self, entry: &LogEntry) -> TaskLogRepositoryResult<()> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<Vec<LogEntry>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(entries
            .iter()
            .filter(|entry| entry.task_code() == code)
            .cloned()
            .collect())
    }

    async fn delete_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<usize> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        let before = entries.len();
        entries.retain(|entry| entry.task_code() != code);
        Ok(before - entries.len())
    }
}
