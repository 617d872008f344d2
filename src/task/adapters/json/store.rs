//! File-backed store implementing the user, task and audit log ports.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

use super::document::Document;
use crate::task::{
    domain::{LogEntry, Task, TaskCode, User, UserCode},
    ports::{
        TaskLogRepository, TaskLogRepositoryError, TaskLogRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult, UserRepository, UserRepositoryError,
        UserRepositoryResult,
    },
};

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "tasklog.json";

/// Errors raised while reading or writing the JSON document.
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// Filesystem access failed.
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The document could not be encoded or decoded.
    #[error("store document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A previous operation panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,

    /// A user with the same code is already registered.
    #[error("user {0} is already registered")]
    DuplicateUser(UserCode),
}

/// JSON document store shared by all three task ports.
///
/// Every operation reads the whole document, applies its change and writes
/// the document back through a temporary file.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    dir: Arc<Dir>,
    file_name: String,
    guard: Arc<Mutex<()>>,
}

impl JsonTaskStore {
    /// Opens (creating if needed) the data directory at `path` and uses
    /// [`DEFAULT_FILE_NAME`] inside it.
    ///
    /// # Errors
    ///
    /// Returns [`JsonStoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> Result<Self, JsonStoreError> {
        Self::open_with_file_name(path, DEFAULT_FILE_NAME)
    }

    /// Opens the data directory at `path` using a custom document file name.
    ///
    /// # Errors
    ///
    /// Returns [`JsonStoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open_with_file_name(
        path: &Utf8Path,
        file_name: impl Into<String>,
    ) -> Result<Self, JsonStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
            guard: Arc::new(Mutex::new(())),
        })
    }

    /// Adds a user to the registry section of the document.
    ///
    /// Registered users are never changed afterwards, since tasks keep a copy
    /// of their assignee.
    ///
    /// # Errors
    ///
    /// Returns [`JsonStoreError::DuplicateUser`] when the code is taken, or
    /// another [`JsonStoreError`] when the document cannot be read or
    /// written.
    pub fn register_user(&self, user: User) -> Result<(), JsonStoreError> {
        self.modify(|document| {
            if document.users.iter().any(|existing| existing.code() == user.code()) {
                return Err(JsonStoreError::DuplicateUser(user.code()));
            }
            document.users.push(user);
            Ok(())
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, JsonStoreError> {
        self.guard.lock().map_err(|_| JsonStoreError::Poisoned)
    }

    fn load(&self) -> Result<Document, JsonStoreError> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %self.file_name, "store document missing, starting empty");
                Ok(Document::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, document: &Document) -> Result<(), JsonStoreError> {
        let staging = format!("{}.tmp", self.file_name);
        let encoded = serde_json::to_vec_pretty(document)?;
        self.dir.write(&staging, encoded)?;
        self.dir.rename(&staging, &self.dir, &self.file_name)?;
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T, JsonStoreError> {
        let _lock = self.lock()?;
        let document = self.load()?;
        Ok(f(&document))
    }

    fn modify<T, E>(&self, f: impl FnOnce(&mut Document) -> Result<T, E>) -> Result<T, E>
    where
        E: From<JsonStoreError>,
    {
        let _lock = self.lock()?;
        let mut document = self.load()?;
        let value = f(&mut document)?;
        self.save(&document)?;
        Ok(value)
    }
}

impl From<JsonStoreError> for TaskRepositoryError {
    fn from(err: JsonStoreError) -> Self {
        Self::persistence(err)
    }
}

impl From<JsonStoreError> for UserRepositoryError {
    fn from(err: JsonStoreError) -> Self {
        Self::persistence(err)
    }
}

impl From<JsonStoreError> for TaskLogRepositoryError {
    fn from(err: JsonStoreError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl UserRepository for JsonTaskStore {
    async fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        Ok(self.read(|document| {
            document
                .users
                .iter()
                .find(|user| user.code() == code)
                .cloned()
        })?)
    }
}

#[async_trait]
impl TaskRepository for JsonTaskStore {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read(|document| document.tasks.clone())?)
    }

    async fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.read(|document| {
            document
                .tasks
                .iter()
                .find(|task| task.code() == code)
                .cloned()
        })?)
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.modify(|document| {
            if document.tasks.iter().any(|stored| stored.code() == task.code()) {
                return Err(TaskRepositoryError::DuplicateTask(task.code()));
            }
            document.tasks.push(task.clone());
            Ok(())
        })
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.modify(|document| {
            let slot = document
                .tasks
                .iter_mut()
                .find(|stored| stored.code() == task.code())
                .ok_or(TaskRepositoryError::NotFound(task.code()))?;
            task.clone_into(slot);
            Ok(())
        })
    }

    async fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()> {
        self.modify(|document| {
            let before = document.tasks.len();
            document.tasks.retain(|stored| stored.code() != code);
            if document.tasks.len() == before {
                return Err(TaskRepositoryError::NotFound(code));
            }
            Ok(())
        })
    }
}

#[async_trait]
impl TaskLogRepository for JsonTaskStore {
    async fn append(&self, entry: &LogEntry) -> TaskLogRepositoryResult<()> {
        self.modify(|document| {
            document.logs.push(entry.clone());
            Ok(())
        })
    }

    async fn find_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<Vec<LogEntry>> {
        Ok(self.read(|document| {
            document
                .logs
                .iter()
                .filter(|entry| entry.task_code() == code)
                .cloned()
                .collect()
        })?)
    }

    async fn delete_by_task_code(&self, code: TaskCode) -> TaskLogRepositoryResult<usize> {
        self.modify(|document| {
            let before = document.logs.len();
            document.logs.retain(|entry| entry.task_code() != code);
            Ok(before - document.logs.len())
        })
    }
}
