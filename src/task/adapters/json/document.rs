//! On-disk document layout.

use serde::{Deserialize, Serialize};

use crate::task::domain::{LogEntry, Task, User};

/// Whole-store snapshot serialized as one JSON object.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct Document {
    #[serde(default)]
    pub(super) users: Vec<User>,
    #[serde(default)]
    pub(super) tasks: Vec<Task>,
    #[serde(default)]
    pub(super) logs: Vec<LogEntry>,
}
