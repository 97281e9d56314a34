//! CRUD and filtering over the persisted task collection.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use super::{TaskPersistence, TaskStorageResult};
use crate::task::{
    domain::{FilterMode, Task, TaskDraft, TaskId, TaskPatch},
    ports::SlotStore,
};

/// Result type for task repository operations.
///
/// The error branch only carries storage failures; a missing task is
/// reported through `None` or `false`.
pub type TaskRepositoryResult<T> = TaskStorageResult<T>;

/// Task repository over a whole-collection persistence adapter.
///
/// Every operation works on a freshly loaded snapshot. Mutations write the
/// full collection back; lookups and filters never write.
pub struct TaskRepository<S, C>
where
    S: SlotStore,
    C: Clock + Send + Sync,
{
    persistence: TaskPersistence<S>,
    clock: Arc<C>,
}

impl<S, C> TaskRepository<S, C>
where
    S: SlotStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository over an explicit persistence adapter.
    #[must_use]
    pub const fn new(persistence: TaskPersistence<S>, clock: Arc<C>) -> Self {
        Self { persistence, clock }
    }

    /// Creates a repository over `store` with the default storage
    /// configuration.
    #[must_use]
    pub fn with_store(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::new(TaskPersistence::with_defaults(store), clock)
    }

    /// Returns the underlying persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// Returns every task in storage order.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded.
    pub fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.persistence.load()
    }

    /// Finds a task by identifier.
    ///
    /// Returns `None` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded.
    pub fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.persistence.load()?;
        Ok(tasks.into_iter().find(|task| task.id() == id))
    }

    /// Appends `task` to the collection and returns it unchanged.
    ///
    /// The caller guarantees the identifier is not already stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded or saved.
    pub fn add(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut tasks = self.persistence.load()?;
        tasks.push(task.clone());
        self.persistence.save(&tasks)?;
        debug!(task_id = %task.id(), "added task");
        Ok(task)
    }

    /// Creates a pending task from validated input and appends it.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded or saved.
    pub fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        self.add(Task::from_draft(draft, &*self.clock))
    }

    /// Applies `patch` to the task with `id`, keeping its position.
    ///
    /// Returns `None` without writing when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded or saved.
    pub fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        self.mutate(id, "update", |task, clock| task.apply_patch(patch, clock))
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `None` without writing when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded or saved.
    pub fn toggle_complete(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.mutate(id, "toggle_complete", |task, clock| task.toggle_complete(clock))
    }

    /// Removes the task with `id`.
    ///
    /// Returns whether a task was removed. The collection is written only
    /// when something was removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded or saved.
    pub fn delete(&self, id: &TaskId) -> TaskRepositoryResult<bool> {
        let mut tasks = self.persistence.load()?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);

        if tasks.len() == before {
            debug!(task_id = %id, operation = "delete", "task not found");
            return Ok(false);
        }

        self.persistence.save(&tasks)?;
        debug!(task_id = %id, "deleted task");
        Ok(true)
    }

    /// Returns the tasks selected by `mode`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the collection cannot be loaded.
    pub fn filter(&self, mode: FilterMode) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.persistence.load()?;
        Ok(tasks.into_iter().filter(|task| mode.matches(task)).collect())
    }

    /// Loads the collection, applies `apply` to the matching task in place
    /// and saves the result.
    fn mutate(
        &self,
        id: &TaskId,
        operation: &'static str,
        apply: impl FnOnce(&mut Task, &C),
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.persistence.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            debug!(task_id = %id, operation, "task not found");
            return Ok(None);
        };

        apply(task, &*self.clock);
        let updated = task.clone();
        self.persistence.save(&tasks)?;
        debug!(task_id = %id, operation, "mutated task");
        Ok(Some(updated))
    }
}
