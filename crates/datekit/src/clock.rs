//! Injectable source of the current date.
//!
//! `months_difference` is the only operation in the crate that depends on
//! "now"; routing that read through a trait keeps it deterministic under
//! test.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Intended for tests and deterministic
/// callers.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
