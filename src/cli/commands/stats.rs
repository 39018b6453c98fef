//! Statistics command implementation.

use crate::cli::args::OutputFormat;
use crate::error::PracticeError;
use crate::features::history::History;
use crate::features::stats::SectionStats;
use crate::output::format_stats;
use crate::storage::RecordStore;

/// Show aggregate statistics, optionally per section.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn stats<S: RecordStore>(
    history: &History<S>,
    by_section: bool,
    format: OutputFormat,
) -> Result<String, PracticeError> {
    let snapshot = history.stats();
    let sections = by_section.then(|| SectionStats::calculate(history.records()));
    format_stats(&snapshot, sections.as_deref(), format)
}
