//! Weekend and business-day counting.
//!
//! Span counts here are inclusive of both endpoints, unlike
//! `arith::days_between`, which is an exclusive difference.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{DateMathError, DateMathResult};
use crate::holiday::HolidayEntry;

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A weekday not listed in `holidays`.
pub fn is_business_day(date: NaiveDate, holidays: &[HolidayEntry]) -> bool {
    !is_weekend(date) && !holidays.iter().any(|h| h.date == date)
}

/// Inclusive day count of `[from, to]` with Saturdays and Sundays
/// removed.
pub fn weekday_span(from: NaiveDate, to: NaiveDate) -> DateMathResult<i64> {
    if to < from {
        return Err(DateMathError::InvalidRange { from, to });
    }

    let days = (to - from).num_days() + 1;
    let weekend_days = (0..days)
        .filter(|&i| is_weekend(from + Duration::days(i)))
        .count() as i64;

    Ok(days - weekend_days)
}

/// `weekday_span` further reduced by every holiday inside `[from, to]`
/// that falls on a weekday.
///
/// A holiday on a weekend was already removed by the weekend pass and
/// must be skipped here so it is not subtracted twice.
pub fn business_day_span(
    from: NaiveDate,
    to: NaiveDate,
    holidays: &[HolidayEntry],
) -> DateMathResult<i64> {
    let mut days = weekday_span(from, to)?;

    for holiday in holidays {
        if from <= holiday.date && holiday.date <= to && !is_weekend(holiday.date) {
            days -= 1;
        }
    }

    Ok(days)
}

/// First business day strictly after `date`.
pub fn next_business_day(date: NaiveDate, holidays: &[HolidayEntry]) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while !is_business_day(next, holidays) {
        next += Duration::days(1);
    }
    next
}
