//! Calendar-day arithmetic on naive dates and timestamps.
//!
//! These operations act on the civil calendar only; no timezone is
//! consulted or attached.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Zero point for day-count-since-epoch calculations: 1970-01-01.
fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

/// Shift a timestamp forward by `n` calendar days. `n` may be negative
/// to mean "earlier". Time-of-day is preserved.
pub fn add_days(from: NaiveDateTime, n: i64) -> NaiveDateTime {
    from + Duration::days(n)
}

/// Shift a timestamp backward by `n` calendar days.
pub fn sub_days(from: NaiveDateTime, n: i64) -> NaiveDateTime {
    add_days(from, -n)
}

/// Whole days from `from` to `to`. Exclusive span: both endpoints on the
/// same date yield 0, and the result is negative when `to` precedes
/// `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Whole days from 1970-01-01T00:00:00 UTC to the given timestamp,
/// treating its clock fields as UTC.
pub fn days_since_epoch(from: NaiveDateTime) -> i64 {
    (from.date() - epoch_date()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_add_days_crosses_month_boundary() {
        assert_eq!(add_days(midnight(2023, 1, 28), 5), midnight(2023, 2, 2));
    }

    #[test]
    fn test_add_negative_days_goes_backward() {
        assert_eq!(add_days(midnight(2023, 1, 5), -10), midnight(2022, 12, 26));
    }

    #[test]
    fn test_sub_days_inverts_add_days() {
        let samples = [
            (midnight(2023, 1, 1), 5),
            (midnight(2020, 2, 29), 365),
            (midnight(1969, 7, 20), -40),
            (midnight(2023, 12, 31), 0),
        ];
        for (d, n) in samples {
            assert_eq!(sub_days(add_days(d, n), n), d);
        }
    }

    #[test]
    fn test_add_days_preserves_time_of_day() {
        let t = date(2023, 3, 10).and_hms_opt(14, 45, 30).unwrap();
        let shifted = add_days(t, 3);
        assert_eq!(shifted.date(), date(2023, 3, 13));
        assert_eq!(shifted.time(), t.time());
    }

    #[test]
    fn test_days_between_same_date_is_zero() {
        assert_eq!(days_between(date(2023, 6, 1), date(2023, 6, 1)), 0);
    }

    #[test]
    fn test_days_between_is_exclusive_and_signed() {
        assert_eq!(days_between(date(2023, 1, 1), date(2023, 1, 31)), 30);
        assert_eq!(days_between(date(2023, 1, 31), date(2023, 1, 1)), -30);
    }

    #[test]
    fn test_days_since_epoch_around_the_epoch() {
        assert_eq!(days_since_epoch(midnight(1970, 1, 1)), 0);
        assert_eq!(days_since_epoch(midnight(1970, 1, 2)), 1);
        assert_eq!(days_since_epoch(midnight(1969, 12, 31)), -1);
    }

    #[test]
    fn test_days_since_epoch_ignores_time_of_day() {
        let noon = date(1970, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(days_since_epoch(noon), 0);
    }
}
