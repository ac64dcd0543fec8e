//! Zone-rules-based localization and conversion between named timezones.
//!
//! Identifiers are resolved against the IANA database via chrono-tz, so
//! conversions follow each zone's historical offset rules rather than a
//! fixed UTC offset.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{DateMathError, DateMathResult};

/// Resolve a timezone identifier (e.g. "UTC", "US/Eastern") to a zone.
pub fn resolve_zone(name: &str) -> DateMathResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| DateMathError::UnknownTimezone(name.to_string()))
}

/// Attach `zone` to a naive timestamp, interpreting its clock fields as
/// local wall time in that zone.
///
/// A wall time made ambiguous by clocks rolling back resolves to the
/// earlier of the two instants. A wall time skipped by clocks springing
/// forward does not exist and is an error.
pub fn localize(naive: NaiveDateTime, zone: Tz) -> DateMathResult<DateTime<Tz>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(DateMathError::NonexistentLocalTime(
            naive,
            zone.name().to_string(),
        )),
    }
}

/// Localize `naive` in `from_zone`, then re-express the same instant in
/// `to_zone`. Fails with `UnknownTimezone` when either identifier does
/// not resolve.
pub fn convert(
    naive: NaiveDateTime,
    from_zone: &str,
    to_zone: &str,
) -> DateMathResult<DateTime<Tz>> {
    let from_tz = resolve_zone(from_zone)?;
    let to_tz = resolve_zone(to_zone)?;
    let localized = localize(naive, from_tz)?;
    Ok(localized.with_timezone(&to_tz))
}
