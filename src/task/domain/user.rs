//! Users known to the task tracker.

use super::UserCode;
use serde::{Deserialize, Serialize};

/// A person who can act on tasks or be responsible for them.
///
/// Users are owned by an external registry; the task domain only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    code: UserCode,
    name: String,
}

impl User {
    /// Creates a user value.
    #[must_use]
    pub fn new(code: impl Into<UserCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns the user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
