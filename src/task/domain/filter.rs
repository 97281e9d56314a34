//! Completion filter over the task collection.

use super::Task;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects a subset of tasks by completion status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl FilterMode {
    /// Parses a host-supplied filter name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Any
    /// name other than `pending` or `completed` selects [`FilterMode::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `task` belongs to the selected subset.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed(),
            Self::Completed => task.completed(),
        }
    }
}

impl From<&str> for FilterMode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
