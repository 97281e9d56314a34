//! Storage configuration for task persistence.

use serde::{Deserialize, Serialize};

/// Slot key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "taskManager_tasks";

/// Handling of a stored collection that cannot be deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedDataPolicy {
    /// Log a warning and continue with an empty collection.
    #[default]
    TreatAsEmpty,
    /// Surface the failure to the caller.
    Fail,
}

/// Settings for [`TaskPersistence`](super::TaskPersistence).
///
/// Deserializes from camelCase keys with every field optional, so hosts can
/// embed it in their own configuration documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    storage_key: String,
    on_malformed: MalformedDataPolicy,
}

impl StorageConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot key holding the collection.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the malformed-data policy.
    #[must_use]
    pub const fn with_malformed_policy(mut self, policy: MalformedDataPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Returns the slot key holding the collection.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the malformed-data policy.
    #[must_use]
    pub const fn malformed_policy(&self) -> MalformedDataPolicy {
        self.on_malformed
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            on_malformed: MalformedDataPolicy::default(),
        }
    }
}
