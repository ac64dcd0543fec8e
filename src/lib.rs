//! Date/time utilities: timezone conversion, calendar-day arithmetic,
//! and business-day counting against a flat-file holiday list.
//!
//! This crate provides:
//! - `DateUtility`, the entry point bound to a holiday file path
//! - `timezone` for zone-rules-based conversion between named zones
//! - `arith` for calendar-day arithmetic and epoch day counts
//! - `business` for weekend- and holiday-aware span counting
//! - `holiday` for the `region,YYYYMMDD,name` holiday file format

pub mod arith;
pub mod business;
pub mod config;
pub mod error;
pub mod holiday;
pub mod timezone;
pub mod utility;

// Re-export the main surface at crate root for convenience
pub use config::DateMathConfig;
pub use error::{DateMathError, DateMathResult};
pub use holiday::HolidayEntry;
pub use utility::DateUtility;
