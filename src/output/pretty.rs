use colored::Colorize;

use crate::features::history::SessionRecord;
use crate::features::stats::{render_bar_chart, SectionStats, StatsSnapshot};

/// Format history (already in display order) as a pretty table
pub fn format_history_pretty(records: &[&SessionRecord]) -> String {
    if records.is_empty() {
        return "History (0 sessions)\n  No sessions yet".to_string();
    }

    let mut output = format!("History ({} sessions)\n", records.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    let width = records.iter().map(|r| r.section.chars().count()).max().unwrap_or(0);
    for (i, record) in records.iter().enumerate() {
        let position = format!("{:>3}", i + 1);
        let section = format!("{:<width$}", record.section);
        let duration = format!("{:>8}", record.format_duration());
        output.push_str(&format!(
            "{}  {}  {}  {}\n",
            position.dimmed(),
            section.bold(),
            duration.cyan(),
            record.format_timestamp().dimmed(),
        ));
    }

    output
}

/// Format statistics, optionally with a per-section breakdown
pub fn format_stats_pretty(stats: &StatsSnapshot, sections: Option<&[SectionStats]>) -> String {
    let mut lines = vec!["PRACTICE STATS".bold().to_string(), "─".repeat(40)];
    lines.push(format!("  Sessions:  {}", stats.count.to_string().cyan()));
    lines.push(format!("  Average:   {}", stats.format_average()));
    lines.push(format!("  Total:     {}", stats.format_total().green()));
    lines.push(format!("  Best:      {}", stats.format_best().yellow()));

    if let Some(sections) = sections {
        lines.push(String::new());
        lines.push("BY SECTION".bold().to_string());
        lines.push("─".repeat(40));

        if sections.is_empty() {
            lines.push("  No sessions yet".dimmed().to_string());
        } else {
            for section in sections {
                lines.push(format!(
                    "  {}  {} sessions, avg {}, best {}",
                    section.section.bold(),
                    section.stats.count,
                    section.stats.format_average(),
                    section.stats.format_best(),
                ));
            }

            let data: Vec<(String, u64)> = sections
                .iter()
                .map(|s| (s.section.clone(), s.stats.total_ms))
                .collect();
            lines.push(String::new());
            lines.push(render_bar_chart(&data, 12, 30));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn record(section: &str, ms: u64) -> SessionRecord {
        SessionRecord::new(section, ms, DateTime::from_timestamp(0, 0).unwrap())
    }

    #[test]
    fn test_format_history_empty() {
        let output = format_history_pretty(&[]);
        assert!(output.contains("0 sessions"));
        assert!(output.contains("No sessions yet"));
    }

    #[test]
    fn test_format_history_numbers_rows() {
        let a = record("Reading", 90_000);
        let b = record("Listening", 3_661_000);
        let output = format_history_pretty(&[&a, &b]);

        assert!(output.contains("2 sessions"));
        assert!(output.contains("Reading"));
        assert!(output.contains("01:30"));
        assert!(output.contains("Listening"));
        assert!(output.contains("01:01:01"));
    }

    #[test]
    fn test_format_stats_empty_best() {
        let output = format_stats_pretty(&StatsSnapshot::default(), None);
        assert!(output.contains("--:--"));
        assert!(!output.contains("BY SECTION"));
    }

    #[test]
    fn test_format_stats_by_section() {
        let records = [record("Reading", 60_000), record("Writing", 120_000)];
        let output = format_stats_pretty(
            &StatsSnapshot::calculate(&records),
            Some(&SectionStats::calculate(&records)),
        );
        assert!(output.contains("BY SECTION"));
        assert!(output.contains("Writing"));
        assert!(output.contains("02:00"));
    }
}
