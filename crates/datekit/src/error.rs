use thiserror::Error;

/// An error produced when an input string does not match its expected format.
///
/// Parse failures are the only error condition in this crate; out-of-range
/// arguments (reversed endpoints, zero counts or steps) yield empty sequences
/// instead, so callers can always tell bad input apart from an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A date string did not match the expected pattern.
    #[error("invalid date {input:?}: expected format {format}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The strftime pattern the input was checked against.
        format: String,
    },

    /// A time string did not match `HH:MM`.
    #[error("invalid time {input:?}: expected format HH:MM")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },
}

/// Result alias for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
