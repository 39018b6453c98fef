//! Completed practice sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{format_timestamp, parse_timestamp};
use crate::features::timer::format_duration;

/// One finished, timed practice segment.
///
/// Records are immutable once created; history only appends or removes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Section label the time was spent on.
    pub section: String,
    /// Time used, in whole milliseconds.
    #[serde(rename = "duration", alias = "time")]
    pub duration_ms: u64,
    /// When the session was stopped.
    #[serde(alias = "date", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Accept any format `parse_timestamp` understands.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unreadable timestamp: {raw}")))
}

impl SessionRecord {
    /// Create a record.
    #[must_use]
    pub fn new(section: impl Into<String>, duration_ms: u64, timestamp: DateTime<Utc>) -> Self {
        Self {
            section: section.into(),
            duration_ms,
            timestamp,
        }
    }

    /// Duration as a clock face.
    #[must_use]
    pub fn format_duration(&self) -> String {
        format_duration(i64::try_from(self.duration_ms).unwrap_or(i64::MAX))
    }

    /// Timestamp in local time.
    #[must_use]
    pub fn format_timestamp(&self) -> String {
        format_timestamp(self.timestamp)
    }
}
