//! The library entry point: a `DateUtility` bound to a holiday file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::arith;
use crate::business;
use crate::config::DateMathConfig;
use crate::error::DateMathResult;
use crate::holiday::{self, HolidayEntry};
use crate::timezone;

/// Date utility bound to a holiday file path.
///
/// The file is not read at construction time. Business-day queries
/// re-read it on every call, so edits to the file take effect
/// immediately and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct DateUtility {
    holiday_file: PathBuf,
}

impl DateUtility {
    pub fn new(holiday_file: impl Into<PathBuf>) -> Self {
        DateUtility {
            holiday_file: holiday_file.into(),
        }
    }

    /// Construct from a config naming the holiday file.
    pub fn from_config(config: &DateMathConfig) -> Self {
        DateUtility {
            holiday_file: config.holiday_path(),
        }
    }

    pub fn holiday_file(&self) -> &Path {
        &self.holiday_file
    }

    /// Interpret `naive` as wall time in `from_zone` and re-express the
    /// same instant in `to_zone`.
    pub fn convert(
        &self,
        naive: NaiveDateTime,
        from_zone: &str,
        to_zone: &str,
    ) -> DateMathResult<DateTime<Tz>> {
        timezone::convert(naive, from_zone, to_zone)
    }

    /// Shift a timestamp forward by `n` calendar days.
    pub fn add_days(&self, from: NaiveDateTime, n: i64) -> NaiveDateTime {
        arith::add_days(from, n)
    }

    /// Shift a timestamp backward by `n` calendar days.
    pub fn sub_days(&self, from: NaiveDateTime, n: i64) -> NaiveDateTime {
        arith::sub_days(from, n)
    }

    /// Whole days from `from` to `to` (exclusive span, may be negative).
    pub fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        arith::days_between(from, to)
    }

    /// Whole days from the Unix epoch to `from`, treated as UTC.
    pub fn days_since_epoch(&self, from: NaiveDateTime) -> i64 {
        arith::days_since_epoch(from)
    }

    /// Inclusive day count of `[from, to]` excluding weekends.
    pub fn weekday_span(&self, from: NaiveDate, to: NaiveDate) -> DateMathResult<i64> {
        business::weekday_span(from, to)
    }

    /// Inclusive day count of `[from, to]` excluding weekends and the
    /// holidays listed in the holiday file. Reads the file on every call.
    pub fn business_day_span(&self, from: NaiveDate, to: NaiveDate) -> DateMathResult<i64> {
        let holidays = self.load_holidays()?;
        business::business_day_span(from, to, &holidays)
    }

    /// First business day strictly after `date`, per the holiday file.
    pub fn next_business_day(&self, date: NaiveDate) -> DateMathResult<NaiveDate> {
        let holidays = self.load_holidays()?;
        Ok(business::next_business_day(date, &holidays))
    }

    /// Load the holiday file, in file order.
    pub fn load_holidays(&self) -> DateMathResult<Vec<HolidayEntry>> {
        holiday::load_holidays(&self.holiday_file)
    }
}
