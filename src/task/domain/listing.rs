//! Read model produced when listing tasks for an actor.

use super::{Task, TaskCode, TaskStatus, User};
use std::fmt;

/// Who is responsible for a task, relative to the viewing actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// The viewing actor is responsible.
    Actor,
    /// Another user, identified by display name, is responsible.
    User(String),
}

impl Assignment {
    /// Describes the assignee of `task` from the point of view of `actor`.
    #[must_use]
    pub fn for_actor(task: &Task, actor: &User) -> Self {
        let assignee = task.assignee();
        if assignee.code() == actor.code() {
            Self::Actor
        } else {
            Self::User(assignee.name().to_owned())
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor => f.write_str("you are responsible"),
            Self::User(name) => write!(f, "{name} is responsible"),
        }
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// Task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// Task status.
    pub status: TaskStatus,
    /// Assignee relative to the viewing actor.
    pub assignment: Assignment,
}

impl TaskListing {
    /// Builds the listing row of `task` as seen by `actor`.
    #[must_use]
    pub fn new(task: &Task, actor: &User) -> Self {
        Self {
            code: task.code(),
            name: task.name().as_str().to_owned(),
            status: task.status(),
            assignment: Assignment::for_actor(task, actor),
        }
    }

    /// Returns the human-readable status label.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

impl fmt::Display for TaskListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. task: {}, {}, status: {}",
            self.code,
            self.name,
            self.assignment,
            self.status_label()
        )
    }
}
