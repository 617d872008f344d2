//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod log;
pub mod repository;
pub mod user;

pub use log::{TaskLogRepository, TaskLogRepositoryError, TaskLogRepositoryResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use user::{UserRepository, UserRepositoryError, UserRepositoryResult};
