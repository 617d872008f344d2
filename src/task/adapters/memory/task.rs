//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskCode},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<BTreeMap<TaskCode, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.get(&code).cloned())
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        if tasks.contains_key(&task.code()) {
            return Err(TaskRepositoryError::DuplicateTask(task.code()));
        }
        tasks.insert(task.code(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        let slot = tasks
            .get_mut(&task.code())
            .ok_or(TaskRepositoryError::NotFound(task.code()))?;
        task.clone_into(slot);
        Ok(())
    }

    async fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        tasks
            .remove(&code)
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(code))
    }
}
