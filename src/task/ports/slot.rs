//! Key-value slot port backing task persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for slot store operations.
pub type SlotStoreResult<T> = Result<T, SlotStoreError>;

/// Durable string slots addressed by key.
///
/// Each write replaces the whole value held under the key. Implementations
/// assume a single writer per key.
pub trait SlotStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been written under the key.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::InvalidKey`] when the backend cannot address
    /// the key or [`SlotStoreError::Backend`] when the medium is unavailable.
    fn read(&self, key: &str) -> SlotStoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::InvalidKey`] when the backend cannot address
    /// the key or [`SlotStoreError::Backend`] when the medium is unavailable.
    fn write(&self, key: &str, value: &str) -> SlotStoreResult<()>;

    /// Removes the value stored under `key`.
    ///
    /// Returns whether a value was present.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::InvalidKey`] when the backend cannot address
    /// the key or [`SlotStoreError::Backend`] when the medium is unavailable.
    fn remove(&self, key: &str) -> SlotStoreResult<bool>;
}

/// Errors returned by slot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SlotStoreError {
    /// The key cannot be used by this backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Storage medium failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SlotStoreError {
    /// Wraps a storage medium error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
