//! Filesystem adapters for task persistence.

mod slot;

pub use slot::FileSlotStore;
