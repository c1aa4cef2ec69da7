//! Consecutive-day date sequences.

use chrono::NaiveDate;

use crate::error::ParseResult;
use crate::format::{self, ISO_DATE};

/// Generates `periods` consecutive days starting at `start`, each rendered
/// as `YYYY-MM-DD`.
///
/// The iterator is lazy and finite; a fresh call with the same arguments
/// reproduces identical output. `periods == 0` yields nothing.
pub fn generate_dates(start: NaiveDate, periods: usize) -> impl Iterator<Item = String> {
    start
        .iter_days()
        .take(periods)
        .map(|date| date.format(ISO_DATE).to_string())
}

/// Expands two `YYYY-MM-DD` endpoints into every day between them,
/// inclusive and ascending.
///
/// Returns an empty vector when `date1` is after `date2`.
///
/// ## Errors
/// Returns [`crate::ParseError::InvalidDate`] if either input does not match
/// `YYYY-MM-DD`.
pub fn adjacent_dates(date1: &str, date2: &str) -> ParseResult<Vec<NaiveDate>> {
    let first = format::parse_date(date1, ISO_DATE)?;
    let last = format::parse_date(date2, ISO_DATE)?;

    Ok(first.iter_days().take_while(|day| *day <= last).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_dates() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let expected = [
            "2020-01-01",
            "2020-01-02",
            "2020-01-03",
            "2020-01-04",
            "2020-01-05",
        ];

        let generated: Vec<String> = generate_dates(start, 5).collect();

        assert_eq!(generated, expected);
    }

    #[test]
    fn test_generate_dates_zero_periods() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(generate_dates(start, 0).count(), 0);
    }

    #[test]
    fn test_generate_dates_crosses_month_and_year() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let generated: Vec<String> = generate_dates(start, 4).collect();

        assert_eq!(
            generated,
            ["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"]
        );
    }

    #[test]
    fn test_generate_dates_leap_february() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let generated: Vec<String> = generate_dates(start, 3).collect();

        assert_eq!(generated, ["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_adjacent_dates_inclusive() {
        let dates = adjacent_dates("2024-01-30", "2024-02-02").unwrap();

        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }

    #[test]
    fn test_adjacent_dates_single_day() {
        let dates = adjacent_dates("2024-06-15", "2024-06-15").unwrap();
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_adjacent_dates_consecutive_by_one_day() {
        let dates = adjacent_dates("2024-02-26", "2024-03-03").unwrap();

        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn test_adjacent_dates_reversed_is_empty() {
        let dates = adjacent_dates("2024-02-02", "2024-01-30").unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_adjacent_dates_rejects_bad_format() {
        assert!(adjacent_dates("01-30-2024", "2024-02-02").is_err());
        assert!(adjacent_dates("2024-01-30", "2024/02/02").is_err());
    }
}
