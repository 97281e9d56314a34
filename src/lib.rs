//! Taskpad: local task manager core.
//!
//! This crate provides the data lifecycle of a personal to-do list: task
//! records, in-place edits and completion toggles, completion filters, and
//! whole-collection persistence under a single storage key.
//!
//! # Architecture
//!
//! Taskpad follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task records, repository and persistence
//! - [`telemetry`]: Optional tracing subscriber bootstrap for hosts

pub mod task;
pub mod telemetry;
