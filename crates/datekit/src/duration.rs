//! Duration calculations and duration-offset end dates.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

use crate::clock::{Clock, SystemClock};
use crate::error::ParseResult;
use crate::format::{self, ISO_DATE};

/// Whole minutes from `start` to `end`, both `HH:MM` on the same day.
///
/// No day-rollover handling: if `end` is chronologically before `start` the
/// result is negative.
///
/// ## Errors
/// Returns [`crate::ParseError::InvalidTime`] if either input does not match
/// `HH:MM`.
pub fn duration_minutes(start: &str, end: &str) -> ParseResult<i64> {
    let start = format::parse_time(start)?;
    let end = format::parse_time(end)?;

    Ok((end - start).num_minutes())
}

/// Whole calendar months from `past_date` to today, per the system clock.
///
/// `date_format` defaults to `%Y-%m-%d`. See [`months_difference_with`] for
/// the computation and for a clock-injected variant.
///
/// ## Errors
/// Returns [`crate::ParseError::InvalidDate`] if `past_date` does not match
/// the format.
pub fn months_difference(past_date: &str, date_format: Option<&str>) -> ParseResult<i64> {
    months_difference_with(past_date, date_format, &SystemClock)
}

/// Whole calendar months from `past_date` to `clock.today()`.
///
/// Computed as `(today.year − past.year) * 12 + (today.month − past.month)`.
/// Day-of-month is deliberately ignored: a month that has merely started
/// counts in full, so Dec 31st to Dec 15th a year later is still 12 months.
///
/// ## Errors
/// Returns [`crate::ParseError::InvalidDate`] if `past_date` does not match
/// the format.
#[tracing::instrument(skip(clock))]
pub fn months_difference_with(
    past_date: &str,
    date_format: Option<&str>,
    clock: &impl Clock,
) -> ParseResult<i64> {
    let format = date_format.unwrap_or(ISO_DATE);
    let past = format::parse_date(past_date, format)?;
    let today = clock.today();

    tracing::debug!(%past, %today, "computing month difference");

    let years = i64::from(today.year()) - i64::from(past.year());
    let months = i64::from(today.month()) - i64::from(past.month());

    Ok(years * 12 + months)
}

/// The calendar date exactly `duration` after `start`.
///
/// Any sub-day component of `duration` is applied from midnight and then
/// truncated away, so the result is a pure date.
#[must_use]
pub fn end_date(start: NaiveDate, duration: TimeDelta) -> NaiveDate {
    (start.and_time(NaiveTime::MIN) + duration).date()
}
