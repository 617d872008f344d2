//! Service layer for listing, creating, advancing and deleting tasks.
//!
//! Every successful mutation is followed by exactly one audit log append.
//! Validation happens before any store is touched; a log failure after the
//! task store has been mutated is reported but not rolled back.

use super::{TaskLifecycleError, TaskLifecycleResult};
use crate::task::{
    domain::{LogEntry, Task, TaskCode, TaskListing, TaskName, TaskStatus, User, UserCode},
    ports::{TaskLogRepository, TaskLogRepositoryError, TaskRepository, UserRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    code: TaskCode,
    name: String,
    assignee_code: UserCode,
}

impl CreateTaskRequest {
    /// Creates a request for a task named `name` assigned to `assignee_code`.
    #[must_use]
    pub fn new(
        code: impl Into<TaskCode>,
        name: impl Into<String>,
        assignee_code: impl Into<UserCode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            assignee_code: assignee_code.into(),
        }
    }
}

/// Request payload for changing a task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    code: TaskCode,
    status: TaskStatus,
}

impl ChangeStatusRequest {
    /// Creates a request moving task `code` to `status`.
    #[must_use]
    pub fn new(code: impl Into<TaskCode>, status: TaskStatus) -> Self {
        Self {
            code: code.into(),
            status,
        }
    }
}

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<T, U, L, C>
where
    T: TaskRepository,
    U: UserRepository,
    L: TaskLogRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    logs: Arc<L>,
    clock: Arc<C>,
}

impl<T, U, L, C> TaskLifecycleService<T, U, L, C>
where
    T: TaskRepository,
    U: UserRepository,
    L: TaskLogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, logs: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            logs,
            clock,
        }
    }

    /// Resolves a registered user, typically the acting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UserNotFound`] when the code is not
    /// registered, or [`TaskLifecycleError::UserDirectory`] when the lookup
    /// fails.
    pub async fn find_user(&self, code: UserCode) -> TaskLifecycleResult<User> {
        self.users.find_by_code(code).await?.ok_or_else(|| {
            warn!(user = %code, "unknown user code");
            TaskLifecycleError::UserNotFound(code)
        })
    }

    /// Lists every task as seen by `actor`, ordered by task code.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task store cannot
    /// be read.
    pub async fn list_tasks(&self, actor: &User) -> TaskLifecycleResult<Vec<TaskListing>> {
        let mut tasks = self.tasks.find_all().await?;
        tasks.sort_by_key(Task::code);
        debug!(actor = %actor.code(), count = tasks.len(), "listing tasks");
        Ok(tasks
            .iter()
            .map(|task| TaskListing::new(task, actor))
            .collect())
    }

    /// Creates a not-started task and records the creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UserNotFound`] when the assignee is not
    /// registered, [`TaskLifecycleError::Domain`] for a blank name (nothing
    /// is persisted in either case),
    /// [`TaskLifecycleError::Repository`] when the task store rejects the
    /// insert, or [`TaskLifecycleError::AuditLog`] when the task was stored
    /// but the log append failed.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        actor: &User,
    ) -> TaskLifecycleResult<Task> {
        let assignee = self.find_user(request.assignee_code).await?;
        let name = TaskName::new(request.name)?;

        let task = Task::new(request.code, name, assignee);
        self.tasks.store(&task).await?;
        self.record(&task, actor).await?;

        info!(task = %task.code(), name = %task.name(), actor = %actor.code(), "task registered");
        Ok(task)
    }

    /// Advances a task to the requested status and records the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the status is not exactly one step
    /// ahead (nothing is persisted in either case),
    /// [`TaskLifecycleError::Repository`] when the update fails, or
    /// [`TaskLifecycleError::AuditLog`] when the task was updated but the log
    /// append failed.
    pub async fn change_status(
        &self,
        request: ChangeStatusRequest,
        actor: &User,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task(request.code).await?;
        task.transition_to(request.status)
            .inspect_err(|err| warn!(error = %err, "status change rejected"))?;

        self.tasks.update(&task).await?;
        self.record(&task, actor).await?;

        info!(
            task = %task.code(),
            status = task.status().as_str(),
            actor = %actor.code(),
            "task status changed"
        );
        Ok(task)
    }

    /// Deletes a done task together with its audit log entries.
    ///
    /// Returns the removed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the task is not done,
    /// [`TaskLifecycleError::Repository`] when the delete fails, or
    /// [`TaskLifecycleError::AuditLog`] when the task was deleted but its log
    /// entries could not be removed.
    pub async fn delete_task(&self, code: TaskCode) -> TaskLifecycleResult<Task> {
        let task = self.find_task(code).await?;
        task.ensure_removable()
            .inspect_err(|err| warn!(error = %err, "task deletion rejected"))?;

        self.tasks.delete(code).await?;
        let removed = self
            .logs
            .delete_by_task_code(code)
            .await
            .map_err(|source| audit_failure(code, source))?;

        info!(task = %code, removed_log_entries = removed, "task deleted");
        Ok(task)
    }

    /// Returns the audit trail of a task in the order it was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task or
    /// [`TaskLifecycleError::AuditLog`] when the log cannot be read.
    pub async fn task_history(&self, code: TaskCode) -> TaskLifecycleResult<Vec<LogEntry>> {
        self.find_task(code).await?;
        self.logs
            .find_by_task_code(code)
            .await
            .map_err(|source| audit_failure(code, source))
    }

    async fn find_task(&self, code: TaskCode) -> TaskLifecycleResult<Task> {
        self.tasks.find_by_code(code).await?.ok_or_else(|| {
            warn!(task = %code, "unknown task code");
            TaskLifecycleError::TaskNotFound(code)
        })
    }

    async fn record(&self, task: &Task, actor: &User) -> TaskLifecycleResult<()> {
        let entry = LogEntry::record(task, actor, &*self.clock);
        self.logs
            .append(&entry)
            .await
            .map_err(|source| audit_failure(task.code(), source))
    }
}

fn audit_failure(task_code: TaskCode, source: TaskLogRepositoryError) -> TaskLifecycleError {
    warn!(task = %task_code, error = %source, "audit log operation failed");
    TaskLifecycleError::AuditLog { task_code, source }
}
