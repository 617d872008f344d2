//! Task tracking for tasklog.
//!
//! Tasks are created with a responsible user, advanced one status step at a
//! time and recorded in an append-only audit log on every change. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
