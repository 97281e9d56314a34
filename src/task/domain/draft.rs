//! Validation of raw task input supplied by hosts.

use super::{DueDate, TaskDraftError, TaskPatch};

/// Validated field values for creating or editing a task.
///
/// Hosts collect title, description and due date as text; `TaskDraft`
/// enforces the required-field rules before anything reaches the
/// repository, which does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: DueDate,
}

impl TaskDraft {
    /// Validates raw host input.
    ///
    /// Title and description are trimmed; a blank description becomes
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDraftError::EmptyTitle`] for a blank title,
    /// [`TaskDraftError::MissingDueDate`] for a blank due date, and
    /// [`TaskDraftError::InvalidDueDate`] when the due date is not a
    /// `YYYY-MM-DD` calendar date.
    pub fn parse(title: &str, description: &str, due_date: &str) -> Result<Self, TaskDraftError> {
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskDraftError::EmptyTitle);
        }
        if due_date.trim().is_empty() {
            return Err(TaskDraftError::MissingDueDate);
        }
        let parsed_due_date = DueDate::parse(due_date)?;
        let trimmed_description = description.trim();

        Ok(Self {
            title: trimmed_title.to_owned(),
            description: (!trimmed_description.is_empty()).then(|| trimmed_description.to_owned()),
            due_date: parsed_due_date,
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the validated description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the validated due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Converts the draft into a patch overwriting all three editable
    /// fields, as an edit form submission does.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        let patch = TaskPatch::new()
            .with_title(self.title)
            .with_due_date(self.due_date);
        match self.description {
            Some(description) => patch.with_description(description),
            None => patch.clear_description(),
        }
    }

    pub(super) fn into_parts(self) -> (String, Option<String>, DueDate) {
        (self.title, self.description, self.due_date)
    }
}
