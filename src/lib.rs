//! tasklog: a task tracker with an audited status lifecycle.
//!
//! Users create tasks, assign a responsible user and advance each task
//! through `not started -> in progress -> done`. Every creation and status
//! change is appended to an audit log.
//!
//! # Architecture
//!
//! tasklog follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the user, task and log stores
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON file)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle rules, stores and orchestration
//! - [`config`]: Configuration for the command line tool

pub mod config;
pub mod task;
