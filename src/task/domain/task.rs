//! Task record and its in-place mutations.

use super::{DueDate, TaskDraft, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
///
/// Serialized with camelCase keys (`dueDate`, `createdAt`, `updatedAt`) so a
/// stored collection keeps the layout hosts already read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    description: Option<String>,
    due_date: DueDate,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date.
    pub due_date: DueDate,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with a fresh identifier.
    ///
    /// Performs no validation; see [`TaskDraft`] for boundary checks.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: DueDate,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: non_empty(description),
            due_date,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Creates a pending task from validated host input.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        let (title, description, due_date) = draft.into_parts();
        Self::new(title, description, due_date, clock)
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: non_empty(data.description),
            due_date: data.due_date,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips the completion flag.
    pub fn toggle_complete(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Overwrites every field present in `patch`.
    ///
    /// The timestamp is refreshed even when the patch is empty or writes the
    /// values already held.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        let TaskPatch {
            title,
            description,
            due_date,
        } = patch;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = non_empty(new_description);
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date;
        }
        self.touch(clock);
    }

    /// Refreshes `updated_at`, never moving it backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}

/// An empty description is stored as no description.
fn non_empty(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_empty)
}
