//! Source of the issue date printed on each receipt.

use chrono::{Local, NaiveDate};

/// Supplies today's date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
