//! Task collection management for taskpad.
//!
//! This module stores to-do items as one serialized collection in a
//! key-value slot and exposes create, edit, complete, delete and filter
//! operations over it. Not-found is reported through return values; only
//! storage failures surface as errors. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Persistence and repository services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
