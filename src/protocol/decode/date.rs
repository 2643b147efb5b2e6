//! ISO date, time, and timestamp text.
//!
//! Temporal fields travel as character data in the field's CCSID:
//! - DATE: `yyyy-mm-dd` (10 characters)
//! - TIME: `hh.mm.ss` (8 characters; `:` separators are also accepted)
//! - TIMESTAMP: `yyyy-mm-dd-hh.mm.ss.ffffff` (26 characters)

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

/// Characters in an ISO date.
pub const DATE_LENGTH: usize = 10;
/// Characters in an ISO time.
pub const TIME_LENGTH: usize = 8;
/// Characters in a timestamp with microseconds.
pub const TIMESTAMP_LENGTH: usize = 26;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H.%M.%S", "%H:%M:%S"];
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d-%H.%M.%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse `yyyy-mm-dd`.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| Error::mismatch(format!("invalid date {:?}: {}", text, e)))
}

/// Parse `hh.mm.ss` or `hh:mm:ss`.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| Error::mismatch(format!("invalid time {:?}", text)))
}

/// Parse a timestamp in host (`yyyy-mm-dd-hh.mm.ss.ffffff`) or escape
/// (`yyyy-mm-dd hh:mm:ss.f`) form. A bare date means midnight.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Some(ts) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Ok(ts);
    }
    if text.len() == DATE_LENGTH {
        if let Some(midnight) = parse_date(text).ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
            return Ok(midnight);
        }
    }
    Err(Error::mismatch(format!("invalid timestamp {:?}", text)))
}

/// Format as `yyyy-mm-dd`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format as `hh.mm.ss`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMATS[0]).to_string()
}

/// Format as `yyyy-mm-dd-hh.mm.ss.ffffff`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d-%H.%M.%S%.6f").to_string()
}
