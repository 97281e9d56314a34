//! Calendar due dates and deadline classification.

use super::ParseDueDateError;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days ahead of today still considered an approaching deadline.
const APPROACHING_WINDOW_DAYS: i64 = 2;

/// Calendar day a task is due, without a time component.
///
/// Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a due date from year, month and day.
    ///
    /// Returns `None` when the components do not form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDueDateError`] when the text is not a valid calendar
    /// date in that format.
    pub fn parse(value: &str) -> Result<Self, ParseDueDateError> {
        NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseDueDateError(value.to_owned()))
    }

    /// Returns the current UTC calendar day of `clock`.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the signed number of days from `today` until this date.
    ///
    /// Negative when the date lies in the past.
    #[must_use]
    pub fn days_from(self, today: Self) -> i64 {
        self.0.signed_duration_since(today.0).num_days()
    }

    /// Classifies this date relative to `today`.
    #[must_use]
    pub fn deadline_status(self, today: Self) -> DeadlineStatus {
        match self.days_from(today) {
            days if days < 0 => DeadlineStatus::PastDue,
            days if days <= APPROACHING_WINDOW_DAYS => DeadlineStatus::Approaching,
            _ => DeadlineStatus::Upcoming,
        }
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}

/// Position of a due date relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// The due date is before today.
    PastDue,
    /// The due date is today or within the next two days.
    Approaching,
    /// The due date is further out.
    Upcoming,
}

impl DeadlineStatus {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PastDue => "past_due",
            Self::Approaching => "approaching",
            Self::Upcoming => "upcoming",
        }
    }
}
