//! Application services for task persistence and repository operations.

mod config;
mod persistence;
mod repository;

pub use config::{DEFAULT_STORAGE_KEY, MalformedDataPolicy, StorageConfig};
pub use persistence::{TaskPersistence, TaskStorageError, TaskStorageResult};
pub use repository::{TaskRepository, TaskRepositoryResult};
