//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasklog::task::{
    adapters::memory::{InMemoryTaskLogRepository, InMemoryTaskRepository, InMemoryUserRepository},
    domain::{Task, TaskStatus, User},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryTaskLogRepository,
    DefaultClock,
>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub service: TestTaskService,
    pub users: InMemoryUserRepository,
    pub tasks: InMemoryTaskRepository,
    pub logs: InMemoryTaskLogRepository,
    pub actor: Option<User>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskStatusWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let users = InMemoryUserRepository::new();
        let tasks = InMemoryTaskRepository::new();
        let logs = InMemoryTaskLogRepository::new();
        let service = TaskLifecycleService::new(
            Arc::new(tasks.clone()),
            Arc::new(users.clone()),
            Arc::new(logs.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            tasks,
            logs,
            actor: None,
            last_result: None,
        }
    }

    /// Returns the acting user configured by a given step.
    pub fn actor(&self) -> Result<&User, eyre::Report> {
        self.actor
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing acting user in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Parses a status name used in feature files.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
