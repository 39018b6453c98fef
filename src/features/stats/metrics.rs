//! Metric calculations for statistics.

use serde::Serialize;
use std::collections::HashMap;

use crate::features::history::SessionRecord;
use crate::features::timer::format_duration;

/// Shown in place of a best time when there are no records.
pub const NO_DATA: &str = "--:--";

/// Aggregate figures for a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Number of sessions.
    pub count: usize,
    /// Mean session length (total / count, 0 when empty).
    pub average_ms: u64,
    /// Sum of all session lengths.
    pub total_ms: u64,
    /// Shortest session; `None` when there are no records.
    pub best_ms: Option<u64>,
}

impl StatsSnapshot {
    /// Calculate statistics from records.
    #[must_use]
    pub fn calculate(records: &[SessionRecord]) -> Self {
        Self::from_durations(records.iter().map(|r| r.duration_ms))
    }

    fn from_durations(durations: impl Iterator<Item = u64>) -> Self {
        let mut stats = Self::default();
        for ms in durations {
            stats.count += 1;
            stats.total_ms = stats.total_ms.saturating_add(ms);
            stats.best_ms = Some(stats.best_ms.map_or(ms, |best| best.min(ms)));
        }
        stats.average_ms = match u64::try_from(stats.count) {
            Ok(count) if count > 0 => stats.total_ms / count,
            _ => 0,
        };
        stats
    }

    /// Average as a clock face.
    #[must_use]
    pub fn format_average(&self) -> String {
        format_ms(self.average_ms)
    }

    /// Total as a clock face.
    #[must_use]
    pub fn format_total(&self) -> String {
        format_ms(self.total_ms)
    }

    /// Best time as a clock face, or [`NO_DATA`].
    #[must_use]
    pub fn format_best(&self) -> String {
        self.best_ms.map_or_else(|| NO_DATA.to_string(), format_ms)
    }
}

/// Statistics for one section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    /// Section label.
    pub section: String,
    /// Figures for that section.
    #[serde(flatten)]
    pub stats: StatsSnapshot,
}

impl SectionStats {
    /// Group records by section, largest total first (ties by name).
    #[must_use]
    pub fn calculate(records: &[SessionRecord]) -> Vec<Self> {
        let mut by_section: HashMap<&str, Vec<u64>> = HashMap::new();
        for record in records {
            by_section
                .entry(record.section.as_str())
                .or_default()
                .push(record.duration_ms);
        }

        let mut sections: Vec<Self> = by_section
            .into_iter()
            .map(|(section, durations)| Self {
                section: section.to_string(),
                stats: StatsSnapshot::from_durations(durations.into_iter()),
            })
            .collect();

        sections.sort_by(|a, b| {
            b.stats
                .total_ms
                .cmp(&a.stats.total_ms)
                .then_with(|| a.section.cmp(&b.section))
        });
        sections
    }
}

fn format_ms(ms: u64) -> String {
    format_duration(i64::try_from(ms).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample(section: &str, ms: u64) -> SessionRecord {
        SessionRecord::new(section, ms, DateTime::from_timestamp(0, 0).unwrap())
    }

    #[test]
    fn test_empty_stats() {
        let stats = StatsSnapshot::calculate(&[]);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_ms, 0);
        assert_eq!(stats.total_ms, 0);
        assert_eq!(stats.best_ms, None);
        assert_eq!(stats.format_best(), NO_DATA);
        assert_eq!(stats.format_average(), "00:00");
        assert_eq!(stats.format_total(), "00:00");
    }

    #[test]
    fn test_stats_calculation() {
        let records = [sample("A", 60_000), sample("B", 120_000), sample("A", 30_000)];
        let stats = StatsSnapshot::calculate(&records);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_ms, 210_000);
        assert_eq!(stats.average_ms, 70_000);
        assert_eq!(stats.best_ms, Some(30_000));
        assert_eq!(stats.format_best(), "00:30");
        assert_eq!(stats.format_total(), "03:30");
    }

    #[test]
    fn test_best_distinct_from_zero() {
        let stats = StatsSnapshot::calculate(&[sample("A", 0)]);
        assert_eq!(stats.best_ms, Some(0));
        assert_eq!(stats.format_best(), "00:00");
    }

    #[test]
    fn test_section_breakdown() {
        let records = [
            sample("Reading", 60_000),
            sample("Writing", 300_000),
            sample("Reading", 130_000),
            sample("Listening", 180_000),
        ];
        let sections = SectionStats::calculate(&records);

        let names: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(names, ["Writing", "Reading", "Listening"]);

        assert_eq!(sections[1].stats.count, 2);
        assert_eq!(sections[1].stats.total_ms, 190_000);
        assert_eq!(sections[1].stats.average_ms, 95_000);
        assert_eq!(sections[1].stats.best_ms, Some(60_000));
    }

    #[test]
    fn test_section_breakdown_ties_sorted_by_name() {
        let records = [sample("Writing", 1_000), sample("Reading", 1_000)];
        let sections = SectionStats::calculate(&records);
        assert_eq!(sections[0].section, "Reading");
    }
}
