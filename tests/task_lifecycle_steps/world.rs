//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskpad::task::{
    adapters::memory::InMemorySlotStore,
    domain::{Task, TaskDraftError, TaskId},
    ports::SlotStore,
    services::{DEFAULT_STORAGE_KEY, TaskRepository},
};

/// Repository type used by the BDD world.
pub type TestTaskRepository = TaskRepository<InMemorySlotStore, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub store: InMemorySlotStore,
    pub repository: TestTaskRepository,
    pub last_task: Option<Task>,
    pub deleted_id: Option<TaskId>,
    pub blob_snapshot: Option<Option<String>>,
    pub last_update: Option<Option<Task>>,
    pub last_submission: Option<Result<Task, TaskDraftError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world over a fresh in-memory slot store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemorySlotStore::new();
        let repository =
            TaskRepository::with_store(Arc::new(store.clone()), Arc::new(DefaultClock));

        Self {
            store,
            repository,
            last_task: None,
            deleted_id: None,
            blob_snapshot: None,
            last_update: None,
            last_submission: None,
        }
    }

    /// Reads the raw task blob from the default slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read.
    pub fn stored_blob(&self) -> Result<Option<String>, eyre::Report> {
        Ok(self.store.read(DEFAULT_STORAGE_KEY)?)
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}
