//! Domain model for task tracking.
//!
//! The task domain models users, tasks, the task status lifecycle and the
//! audit log entries recorded for every task mutation, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod listing;
mod log_entry;
mod task;
mod user;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskCode, TaskName, UserCode};
pub use listing::{Assignment, TaskListing};
pub use log_entry::LogEntry;
pub use task::{Task, TaskStatus};
pub use user::User;
