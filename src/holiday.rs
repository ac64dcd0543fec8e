//! Holiday list loading from the flat holiday file.
//!
//! The file holds one record per line, `region,YYYYMMDD,name`, with no
//! header row. Commas inside the name field are not supported; such a
//! line fails the field-count check.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DateMathError, DateMathResult};

/// One record of the holiday file.
///
/// The region label and name are carried through as-is and never
/// validated; only the date participates in business-day calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub region: String,
    pub date: NaiveDate,
    pub name: String,
}

/// Parse one holiday line. `line_no` is 1-based.
fn parse_line(line: &str, line_no: usize) -> DateMathResult<HolidayEntry> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(DateMathError::MalformedHolidayLine {
            line_no,
            reason: format!("expected 3 comma-separated fields, got {}", fields.len()),
        });
    }

    let date = NaiveDate::parse_from_str(fields[1], "%Y%m%d").map_err(|_| {
        DateMathError::MalformedHolidayLine {
            line_no,
            reason: format!("invalid date '{}', expected YYYYMMDD", fields[1]),
        }
    })?;

    Ok(HolidayEntry {
        region: fields[0].to_string(),
        date,
        name: fields[2].to_string(),
    })
}

/// Load every holiday record from the file at `path`, in file order.
///
/// The first malformed line aborts the load; no partial list is
/// returned. The file is read whole within this call, so the handle is
/// released on every exit path.
pub fn load_holidays(path: &Path) -> DateMathResult<Vec<HolidayEntry>> {
    let content = std::fs::read_to_string(path)?;

    content
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(line.trim(), i + 1))
        .collect()
}
