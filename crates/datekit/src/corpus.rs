//! Exhaustive date corpus generation.
//!
//! Enumerates every calendar day in a span of years. Useful for building
//! test corpora of date strings without hand-listing month lengths.

use chrono::{Datelike, NaiveDate};

use crate::format::{ISO_DATE, SLASH_DATE};

/// Enumerates every day of every year in `[start_year, end_year]`,
/// chronologically, emitting two renderings per day: `YYYY-MM-DD` followed
/// by `YYYY/MM/DD`.
///
/// Leap years get their February 29th. `start_year > end_year` yields
/// nothing, as do years outside chrono's representable range.
pub fn date_corpus(start_year: i32, end_year: i32) -> impl Iterator<Item = String> {
    (start_year..=end_year)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .flat_map(|jan_first| {
            let year = jan_first.year();
            jan_first
                .iter_days()
                .take_while(move |day| day.year() == year)
                .flat_map(|day| {
                    [
                        day.format(ISO_DATE).to_string(),
                        day.format(SLASH_DATE).to_string(),
                    ]
                })
        })
}
