//! Adapter implementations of the task ports.

pub mod json;
pub mod memory;
