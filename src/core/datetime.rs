//! Timestamp formatting and parsing for session records.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local formats accepted on input besides RFC 3339.
const LOCAL_FORMATS: [&str; 2] = [DISPLAY_FORMAT, "%Y/%m/%d %H:%M:%S"];

/// Format a record timestamp in the local timezone for display.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (what practimer writes), the local display format, and
/// local `2024/3/1 08:30:00` stamps found in older history files.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
