//! In-memory adapters for task tracking.
//!
//! Used by tests and by embedders that do not need durable storage.

mod log;
mod task;
mod user;

pub use log::InMemoryTaskLogRepository;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;
