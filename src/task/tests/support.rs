//! Shared fixtures for task unit tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::DueDate;

/// Clock that advances by one second on every reading.
#[derive(Debug)]
pub struct StepClock {
    next_secs: AtomicI64,
}

impl StepClock {
    /// Starts the clock at `2025-01-01T00:00:00Z`.
    pub const fn new() -> Self {
        Self::starting_at(1_735_689_600)
    }

    /// Starts the clock at the given Unix timestamp.
    pub const fn starting_at(secs: i64) -> Self {
        Self {
            next_secs: AtomicI64::new(secs),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let secs = self.next_secs.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0)
            .single()
            .expect("timestamp within chrono range")
    }
}

/// Clock that moves backwards by one second on every reading.
#[derive(Debug)]
pub struct RewindingClock {
    next_secs: AtomicI64,
}

impl RewindingClock {
    /// Starts the clock at the given Unix timestamp.
    pub const fn starting_at(secs: i64) -> Self {
        Self {
            next_secs: AtomicI64::new(secs),
        }
    }
}

impl Clock for RewindingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let secs = self.next_secs.fetch_sub(1, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0)
            .single()
            .expect("timestamp within chrono range")
    }
}

/// Builds a due date from components known to be valid.
pub fn due(year: i32, month: u32, day: u32) -> DueDate {
    DueDate::from_ymd(year, month, day).expect("valid calendar date")
}
