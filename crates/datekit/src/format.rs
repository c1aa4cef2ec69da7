//! Shared date and time formats.
//!
//! Every module parses and renders through the patterns defined here so that
//! the crate speaks a single set of string conventions.
#![expect(
    clippy::map_err_ignore,
    reason = "chrono's parse error adds nothing beyond the rejected input and pattern"
)]

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ParseError, ParseResult};

/// ISO 8601 calendar date, `YYYY-MM-DD`.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Slash-separated calendar date, `YYYY/MM/DD`.
pub const SLASH_DATE: &str = "%Y/%m/%d";

/// Month-first calendar date, `MM-DD-YYYY`.
pub const US_DATE: &str = "%m-%d-%Y";

/// 24-hour wall-clock time, `HH:MM`.
pub const HOUR_MINUTE: &str = "%H:%M";

/// Parses a calendar date against a strftime pattern.
///
/// ## Errors
/// Returns [`ParseError::InvalidDate`] if `input` does not match `format` or
/// does not name a real calendar day.
pub fn parse_date(input: &str, format: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(input, format).map_err(|_| ParseError::InvalidDate {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Parses a 24-hour `HH:MM` time of day.
///
/// ## Errors
/// Returns [`ParseError::InvalidTime`] if `input` is not a valid `HH:MM`
/// time.
pub fn parse_time(input: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(input, HOUR_MINUTE).map_err(|_| ParseError::InvalidTime {
        input: input.to_string(),
    })
}
