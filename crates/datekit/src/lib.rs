//! Calendar arithmetic utilities.
//!
//! A small toolkit of pure date/time functions: consecutive-day sequences,
//! stepped date ranges, exhaustive per-year date corpora, minute and month
//! durations, and duration-offset end dates. Everything operates on `chrono`
//! value types and strftime-style format strings; nothing is cached or
//! persisted between calls.
//!
//! ```
//! let dates: Vec<String> = datekit::date_range("01-01-2024", "01-10-2024", 3)?.collect();
//! assert_eq!(dates, ["01-01-2024", "01-04-2024", "01-07-2024", "01-10-2024"]);
//!
//! assert_eq!(datekit::duration_minutes("14:45", "15:10")?, 25);
//! # Ok::<(), datekit::ParseError>(())
//! ```

pub mod clock;
pub mod corpus;
pub mod duration;
pub mod error;
pub mod format;
pub mod range;
pub mod sequence;

pub use clock::{Clock, FixedClock, SystemClock};
pub use corpus::date_corpus;
pub use duration::{duration_minutes, end_date, months_difference, months_difference_with};
pub use error::{ParseError, ParseResult};
pub use range::{SteppedDates, date_range};
pub use sequence::{adjacent_dates, generate_dates};
