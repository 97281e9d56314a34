//! Adapter implementations for task persistence ports.

pub mod fs;
pub mod memory;
