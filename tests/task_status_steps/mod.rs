//! Step definitions for task status BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
