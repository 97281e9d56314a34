//! Domain model for the task collection.
//!
//! The task domain models the task record, its in-place mutations, the
//! completion filter and the boundary validation of raw form input. Storage
//! concerns stay outside of the domain boundary.

mod draft;
mod due_date;
mod error;
mod filter;
mod ids;
mod patch;
mod task;

pub use draft::TaskDraft;
pub use due_date::{DeadlineStatus, DueDate};
pub use error::{ParseDueDateError, TaskDraftError};
pub use filter::FilterMode;
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use task::{PersistedTaskData, Task};
