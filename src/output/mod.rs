//! Output formatting for practimer.
//!
//! This module provides formatters for displaying history and statistics in
//! the one-shot subcommands.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PracticeError;
use crate::features::history::SessionRecord;
use crate::features::stats::{SectionStats, StatsSnapshot};

pub use json::*;
pub use pretty::*;

/// Format history (in display order) based on output format
///
/// # Errors
///
/// Returns `PracticeError::Parse` if JSON serialization fails.
pub fn format_history(
    records: &[&SessionRecord],
    format: OutputFormat,
) -> Result<String, PracticeError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format statistics based on output format
///
/// # Errors
///
/// Returns `PracticeError::Parse` if JSON serialization fails.
pub fn format_stats(
    stats: &StatsSnapshot,
    sections: Option<&[SectionStats]>,
    format: OutputFormat,
) -> Result<String, PracticeError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats, sections)),
        OutputFormat::Json => format_stats_json(stats, sections),
    }
}
