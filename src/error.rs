//! Error types for datemath operations.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors that can occur in datemath operations.
#[derive(Error, Debug)]
pub enum DateMathError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Local time {0} does not exist in timezone {1}")]
    NonexistentLocalTime(NaiveDateTime, String),

    #[error("Invalid range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Malformed holiday line {line_no}: {reason}")]
    MalformedHolidayLine { line_no: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for datemath operations.
pub type DateMathResult<T> = Result<T, DateMathError>;
