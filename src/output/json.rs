//! JSON output formatting for practimer.
//!
//! Durations are emitted both raw (milliseconds) and as clock faces so
//! scripts do not need to reimplement the formatting.

use serde::Serialize;
use serde_json::json;

use crate::error::PracticeError;
use crate::features::history::SessionRecord;
use crate::features::stats::{SectionStats, StatsSnapshot};

/// Format history (already in display order) as JSON
///
/// # Errors
///
/// Returns `PracticeError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[&SessionRecord]) -> Result<String, PracticeError> {
    let items: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            json!({
                "index": i + 1,
                "section": record.section,
                "duration_ms": record.duration_ms,
                "duration": record.format_duration(),
                "timestamp": record.timestamp,
            })
        })
        .collect();

    let output = json!({
        "count": items.len(),
        "items": items,
    });
    to_json(&output)
}

/// Format statistics as JSON
///
/// # Errors
///
/// Returns `PracticeError::Parse` if JSON serialization fails.
pub fn format_stats_json(
    stats: &StatsSnapshot,
    sections: Option<&[SectionStats]>,
) -> Result<String, PracticeError> {
    let mut output = stats_value(stats);
    if let Some(sections) = sections {
        let by_section: Vec<_> = sections
            .iter()
            .map(|s| {
                let mut value = stats_value(&s.stats);
                value["section"] = json!(s.section);
                value
            })
            .collect();
        output["by_section"] = json!(by_section);
    }
    to_json(&output)
}

fn stats_value(stats: &StatsSnapshot) -> serde_json::Value {
    json!({
        "count": stats.count,
        "average_ms": stats.average_ms,
        "total_ms": stats.total_ms,
        "best_ms": stats.best_ms,
        "average": stats.format_average(),
        "total": stats.format_total(),
        "best": stats.format_best(),
    })
}

/// Serialize any value to pretty-printed JSON.
///
/// # Errors
///
/// Returns `PracticeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PracticeError> {
    Ok(serde_json::to_string_pretty(value)?)
}
