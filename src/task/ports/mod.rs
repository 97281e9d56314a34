//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod slot;

pub use slot::{SlotStore, SlotStoreError, SlotStoreResult};
