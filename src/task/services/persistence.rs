//! Whole-collection load and save over a slot store.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::{MalformedDataPolicy, StorageConfig};
use crate::task::{
    domain::Task,
    ports::{SlotStore, SlotStoreError},
};

/// Errors returned while loading or saving the task collection.
#[derive(Debug, Clone, Error)]
pub enum TaskStorageError {
    /// The slot store failed.
    #[error(transparent)]
    Slot(#[from] SlotStoreError),

    /// The stored collection could not be deserialized and the configured
    /// policy is [`MalformedDataPolicy::Fail`].
    #[error("malformed task collection under key '{key}': {source}")]
    Malformed {
        /// Slot key holding the malformed value.
        key: String,
        /// Deserialization failure.
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize task collection: {0}")]
    Serialize(#[source] Arc<serde_json::Error>),
}

/// Result type for task storage operations.
pub type TaskStorageResult<T> = Result<T, TaskStorageError>;

/// Loads and saves the entire task collection as one JSON array.
///
/// Every save replaces the stored value; there is no merge and no partial
/// write.
pub struct TaskPersistence<S>
where
    S: SlotStore,
{
    store: Arc<S>,
    config: StorageConfig,
}

impl<S> TaskPersistence<S>
where
    S: SlotStore,
{
    /// Creates a persistence adapter with explicit configuration.
    #[must_use]
    pub const fn new(store: Arc<S>, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// Creates a persistence adapter using [`StorageConfig::default`].
    #[must_use]
    pub fn with_defaults(store: Arc<S>) -> Self {
        Self::new(store, StorageConfig::default())
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Loads the stored collection in storage order.
    ///
    /// A missing or blank slot yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Slot`] when the store fails, or
    /// [`TaskStorageError::Malformed`] when the stored value is not a task
    /// array and the policy is [`MalformedDataPolicy::Fail`].
    pub fn load(&self) -> TaskStorageResult<Vec<Task>> {
        let key = self.config.storage_key();
        let Some(blob) = self.store.read(key)? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Task>>(&blob) {
            Ok(tasks) => Ok(tasks),
            Err(err) => match self.config.malformed_policy() {
                MalformedDataPolicy::TreatAsEmpty => {
                    warn!(
                        key,
                        bytes = blob.len(),
                        error = %err,
                        "stored task collection is malformed; continuing with an empty collection"
                    );
                    Ok(Vec::new())
                }
                MalformedDataPolicy::Fail => Err(TaskStorageError::Malformed {
                    key: key.to_owned(),
                    source: Arc::new(err),
                }),
            },
        }
    }

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Serialize`] when encoding fails or
    /// [`TaskStorageError::Slot`] when the store rejects the write.
    pub fn save(&self, tasks: &[Task]) -> TaskStorageResult<()> {
        let blob =
            serde_json::to_string(tasks).map_err(|err| TaskStorageError::Serialize(Arc::new(err)))?;
        let key = self.config.storage_key();
        self.store.write(key, &blob)?;
        debug!(key, count = tasks.len(), "saved task collection");
        Ok(())
    }

    /// Removes the stored collection entirely.
    ///
    /// Returns whether a collection was stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Slot`] when the store fails.
    pub fn clear(&self) -> TaskStorageResult<bool> {
        Ok(self.store.remove(self.config.storage_key())?)
    }
}
