//! In-memory slot store for tests and embedders without durable storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::ports::{SlotStore, SlotStoreError, SlotStoreResult};

/// Thread-safe in-memory slot store.
///
/// Clones share the same backing map, so a test can keep a handle to
/// inspect raw slot contents written through a repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySlotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one slot.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slots = HashMap::from([(key.into(), value.into())]);
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Returns the number of occupied slots.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Backend`] when the backing lock is poisoned.
    pub fn len(&self) -> SlotStoreResult<usize> {
        let slots = self.slots.read().map_err(|err| poisoned(&err))?;
        Ok(slots.len())
    }

    /// Returns whether no slot is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Backend`] when the backing lock is poisoned.
    pub fn is_empty(&self) -> SlotStoreResult<bool> {
        self.len().map(|count| count == 0)
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> SlotStoreError {
    SlotStoreError::backend(std::io::Error::other(err.to_string()))
}

impl SlotStore for InMemorySlotStore {
    fn read(&self, key: &str) -> SlotStoreResult<Option<String>> {
        let slots = self.slots.read().map_err(|err| poisoned(&err))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SlotStoreResult<()> {
        let mut slots = self.slots.write().map_err(|err| poisoned(&err))?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> SlotStoreResult<bool> {
        let mut slots = self.slots.write().map_err(|err| poisoned(&err))?;
        Ok(slots.remove(key).is_some())
    }
}
