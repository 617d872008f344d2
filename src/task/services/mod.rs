//! Application services for task tracking.

mod error;
mod lifecycle;

pub use error::{ErrorKind, TaskLifecycleError, TaskLifecycleResult};
pub use lifecycle::{ChangeStatusRequest, CreateTaskRequest, TaskLifecycleService};
