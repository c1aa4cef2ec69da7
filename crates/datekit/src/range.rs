//! Stepped date ranges.

use chrono::{NaiveDate, TimeDelta};

use crate::error::ParseResult;
use crate::format::{self, US_DATE};

/// Lazy iterator over a stepped date range, yielding `MM-DD-YYYY` strings.
///
/// Built by [`date_range`].
#[derive(Debug, Clone)]
pub struct SteppedDates {
    current: Option<NaiveDate>,
    end: NaiveDate,
    step: TimeDelta,
}

impl Iterator for SteppedDates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if current > self.end {
            return None;
        }

        // checked_add keeps the iterator finite at chrono's upper bound
        self.current = current.checked_add_signed(self.step);
        Some(current.format(US_DATE).to_string())
    }
}

/// Produces the dates from `start` to `end` (both `MM-DD-YYYY`), spaced
/// `step` days apart.
///
/// The sequence begins exactly at `start` and stops before overshooting:
/// every emitted date is ≤ `end`, and the last one is not adjusted to land
/// on `end`. A `step` of zero yields an empty sequence.
///
/// ## Errors
/// Returns [`crate::ParseError::InvalidDate`] if either input does not match
/// `MM-DD-YYYY`.
#[tracing::instrument]
pub fn date_range(start: &str, end: &str, step: u32) -> ParseResult<SteppedDates> {
    let first = format::parse_date(start, US_DATE)?;
    let last = format::parse_date(end, US_DATE)?;

    tracing::debug!(%first, %last, step, "expanding stepped date range");

    Ok(SteppedDates {
        current: (step > 0).then_some(first),
        end: last,
        step: TimeDelta::days(i64::from(step)),
    })
}
