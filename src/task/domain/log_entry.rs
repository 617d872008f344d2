//! Audit records written for task creation and status changes.

use super::{Task, TaskCode, TaskStatus, User, UserCode};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Immutable audit record of a task event.
///
/// `status` duplicates the task status at the time of the event: the initial
/// status for a creation, the new status for a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    task_code: TaskCode,
    actor_code: UserCode,
    status: TaskStatus,
    date: NaiveDate,
}

impl LogEntry {
    /// Records the current state of `task` as changed by `actor` today.
    ///
    /// The date is taken from the local calendar of `clock`.
    #[must_use]
    pub fn record(task: &Task, actor: &User, clock: &impl Clock) -> Self {
        Self {
            task_code: task.code(),
            actor_code: actor.code(),
            status: task.status(),
            date: clock.local().date_naive(),
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        task_code: TaskCode,
        actor_code: UserCode,
        status: TaskStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            actor_code,
            status,
            date,
        }
    }

    /// Returns the task the entry refers to.
    #[must_use]
    pub const fn task_code(&self) -> TaskCode {
        self.task_code
    }

    /// Returns the user who performed the action.
    #[must_use]
    pub const fn actor_code(&self) -> UserCode {
        self.actor_code
    }

    /// Returns the recorded status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the calendar date of the event.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}
