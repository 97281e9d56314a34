//! In-memory adapters for task persistence.

mod slot;

pub use slot::InMemorySlotStore;
