//! Step definitions for task lifecycle BDD scenarios.

mod when;
pub mod world;
