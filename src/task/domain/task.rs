//! Task aggregate root and the task status lifecycle.

use super::{ParseTaskStatusError, TaskCode, TaskDomainError, TaskName, User};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// Statuses are ordered by lifecycle position, so `NotStarted < InProgress <
/// Done`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    NotStarted,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable label used when listing tasks.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Done => "done",
        }
    }

    /// Returns the numeric status code (`0`, `1` or `2`).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Returns the status one step further along the lifecycle.
    ///
    /// `Done` advances to itself.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress | Self::Done => Self::Done,
        }
    }

    /// Returns `true` when moving from `self` to `target` is allowed.
    ///
    /// The only legal move is to [`Self::advance`], which makes `Done ->
    /// Done` an accepted no-op and rules out skipping or moving backwards.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.advance() == target
    }

    /// Returns `true` when no further progress is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other.to_string())),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "0" | "not_started" => Ok(Self::NotStarted),
            "1" | "in_progress" => Ok(Self::InProgress),
            "2" | "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    code: TaskCode,
    name: TaskName,
    status: TaskStatus,
    assignee: User,
}

impl Task {
    /// Creates a new, not yet started task.
    #[must_use]
    pub const fn new(code: TaskCode, name: TaskName, assignee: User) -> Self {
        Self {
            code,
            name,
            status: TaskStatus::NotStarted,
            assignee,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        code: TaskCode,
        name: TaskName,
        status: TaskStatus,
        assignee: User,
    ) -> Self {
        Self {
            code,
            name,
            status,
            assignee,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the user responsible for the task.
    #[must_use]
    pub const fn assignee(&self) -> &User {
        &self.assignee
    }

    /// Moves the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when `target` is
    /// not exactly one step ahead of the current status (or `Done` while
    /// already done). The task is left unchanged on error.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_code: self.code,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Checks that the task may be removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotCompleted`] unless the task is done.
    pub const fn ensure_removable(&self) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            Ok(())
        } else {
            Err(TaskDomainError::TaskNotCompleted {
                task_code: self.code,
                status: self.status,
            })
        }
    }
}
