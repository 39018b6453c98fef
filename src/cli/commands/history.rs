//! History listing and deletion commands.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::error::PracticeError;
use crate::features::history::History;
use crate::output::{format_history, to_json};
use crate::storage::RecordStore;

/// List sessions, newest first.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn history<S: RecordStore>(
    history: &History<S>,
    format: OutputFormat,
) -> Result<String, PracticeError> {
    format_history(&history.displayed(), format)
}

/// Delete the session at 1-based `position` in the listing.
///
/// Asks on `input` unless `yes` is set; anything but `y` cancels.
///
/// # Errors
///
/// Returns `PracticeError::InvalidIndex` for a position that is not listed,
/// or a storage error if the deletion cannot be saved.
pub fn delete<S: RecordStore, R: BufRead, W: Write>(
    history: &mut History<S>,
    position: usize,
    yes: bool,
    format: OutputFormat,
    input: &mut R,
    prompt: &mut W,
) -> Result<String, PracticeError> {
    let invalid = || PracticeError::InvalidIndex {
        index: position,
        len: history.len(),
    };
    let display_index = position.checked_sub(1).ok_or_else(invalid)?;
    let target = history.get_displayed(display_index).ok_or_else(invalid)?;

    if !yes {
        let question = format!(
            "Delete {} ({}) from {}?",
            target.section,
            target.format_duration(),
            target.format_timestamp()
        );
        if !confirm(&question, input, prompt)? {
            return Ok("Canceled".to_string());
        }
    }

    let removed = history.delete_displayed(display_index)?;
    info!(position, section = %removed.section, "session deleted from cli");

    match format {
        OutputFormat::Json => to_json(&removed),
        OutputFormat::Pretty => Ok(format!(
            "Deleted {} ({})",
            removed.section.bold(),
            removed.format_duration()
        )),
    }
}

/// Delete every session.
///
/// # Errors
///
/// Returns a storage error if the empty history cannot be saved.
pub fn clear<S: RecordStore, R: BufRead, W: Write>(
    history: &mut History<S>,
    yes: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<String, PracticeError> {
    if history.is_empty() {
        return Ok("History is already empty".to_string());
    }

    let question = format!("Delete all {} sessions?", history.len());
    if !yes && !confirm(&question, input, prompt)? {
        return Ok("Canceled".to_string());
    }

    let removed = history.clear()?;
    Ok(format!("Deleted {removed} sessions"))
}

/// Ask a y/n question; only `y`/`yes` counts as yes.
fn confirm<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    prompt: &mut W,
) -> Result<bool, PracticeError> {
    write!(prompt, "{} {} [y/N] ", "?".yellow(), question)?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::history::SessionRecord;
    use crate::storage::MemoryStore;
    use chrono::DateTime;

    fn history() -> History<MemoryStore> {
        let records = vec![
            SessionRecord::new("Reading", 1_000, DateTime::from_timestamp(100, 0).unwrap()),
            SessionRecord::new("Writing", 2_000, DateTime::from_timestamp(200, 0).unwrap()),
        ];
        History::open(MemoryStore::with_records(records))
    }

    #[test]
    fn test_delete_position_one_is_newest() {
        let mut history = history();
        let output = delete(
            &mut history,
            1,
            true,
            OutputFormat::Json,
            &mut &b""[..],
            &mut Vec::new(),
        )
        .unwrap();

        assert!(output.contains("Writing"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].section, "Reading");
    }

    #[test]
    fn test_delete_asks_first() {
        let mut history = history();
        let mut prompt = Vec::new();

        let output = delete(
            &mut history,
            2,
            false,
            OutputFormat::Pretty,
            &mut &b"n\n"[..],
            &mut prompt,
        )
        .unwrap();
        assert_eq!(output, "Canceled");
        assert_eq!(history.len(), 2);
        assert!(String::from_utf8(prompt).unwrap().contains("Reading"));

        delete(
            &mut history,
            2,
            false,
            OutputFormat::Pretty,
            &mut &b"y\n"[..],
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(history.records()[0].section, "Writing");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut history = history();
        for position in [0, 3] {
            let err = delete(
                &mut history,
                position,
                true,
                OutputFormat::Pretty,
                &mut &b""[..],
                &mut Vec::new(),
            )
            .unwrap_err();
            assert!(matches!(err, PracticeError::InvalidIndex { len: 2, .. }));
        }
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = history();
        assert_eq!(
            clear(&mut history, false, &mut &b"\n"[..], &mut Vec::new()).unwrap(),
            "Canceled"
        );
        assert_eq!(
            clear(&mut history, true, &mut &b""[..], &mut Vec::new()).unwrap(),
            "Deleted 2 sessions"
        );
        assert!(history.is_empty());
    }
}
