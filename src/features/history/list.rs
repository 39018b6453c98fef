//! The record list and its display ordering.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::PracticeError;
use crate::features::stats::StatsSnapshot;
use crate::storage::RecordStore;

use super::SessionRecord;

/// One formatted line of the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// Section label.
    pub section: String,
    /// Duration as a clock face.
    pub duration: String,
    /// Completion time in local time.
    pub timestamp: String,
}

impl From<&SessionRecord> for HistoryRow {
    fn from(record: &SessionRecord) -> Self {
        Self {
            section: record.section.clone(),
            duration: record.format_duration(),
            timestamp: record.format_timestamp(),
        }
    }
}

/// Completed sessions plus the store they persist to.
///
/// Storage order is insertion order. Display order is newest timestamp
/// first and is recomputed on demand, so any index coming from the UI is a
/// display index and has to be mapped back before mutating.
pub struct History<S: RecordStore> {
    store: S,
    records: Vec<SessionRecord>,
}

impl<S: RecordStore> History<S> {
    /// Load history from `store`.
    ///
    /// A store that fails to load is treated as empty.
    pub fn open(store: S) -> Self {
        let records = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load history, starting empty");
            Vec::new()
        });
        info!(count = records.len(), "history loaded");
        Self { store, records }
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record and persist the whole list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write; history is left as
    /// it was.
    pub fn append(&mut self, record: SessionRecord) -> Result<(), PracticeError> {
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)
    }

    /// Storage indices in display order (newest first, ties keep insertion
    /// order).
    #[must_use]
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by(|&a, &b| self.records[b].timestamp.cmp(&self.records[a].timestamp));
        order
    }

    /// Records in display order.
    #[must_use]
    pub fn displayed(&self) -> Vec<&SessionRecord> {
        self.display_order()
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Record at a display position.
    #[must_use]
    pub fn get_displayed(&self, display_index: usize) -> Option<&SessionRecord> {
        self.storage_index(display_index).map(|i| &self.records[i])
    }

    /// Map a display position to its storage position.
    #[must_use]
    pub fn storage_index(&self, display_index: usize) -> Option<usize> {
        self.display_order().get(display_index).copied()
    }

    /// Remove the record shown at `display_index` and persist.
    ///
    /// Callers are expected to have confirmed the deletion with the user.
    ///
    /// # Errors
    ///
    /// Returns [`PracticeError::InvalidIndex`] for a position past the end,
    /// or a storage error if the write fails (history is left as it was).
    pub fn delete_displayed(&mut self, display_index: usize) -> Result<SessionRecord, PracticeError> {
        let index = self
            .storage_index(display_index)
            .ok_or(PracticeError::InvalidIndex {
                index: display_index,
                len: self.records.len(),
            })?;

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(section = %removed.section, display_index, storage_index = index, "record deleted");
        Ok(removed)
    }

    /// Remove every record and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn clear(&mut self) -> Result<usize, PracticeError> {
        let count = self.records.len();
        self.commit(Vec::new())?;
        Ok(count)
    }

    /// Formatted rows in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<HistoryRow> {
        self.displayed().into_iter().map(HistoryRow::from).collect()
    }

    /// Aggregate statistics over every record.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::calculate(&self.records)
    }

    fn commit(&mut self, next: Vec<SessionRecord>) -> Result<(), PracticeError> {
        self.store.save(&next)?;
        self.records = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockRecordStore};
    use chrono::DateTime;

    fn sample(section: &str, ms: u64, secs: i64) -> SessionRecord {
        SessionRecord::new(section, ms, DateTime::from_timestamp(secs, 0).unwrap())
    }

    fn unordered_history() -> History<MemoryStore> {
        // Insertion order: B(200), A(100), C(300)
        History::open(MemoryStore::with_records(vec![
            sample("B", 2_000, 200),
            sample("A", 1_000, 100),
            sample("C", 3_000, 300),
        ]))
    }

    #[test]
    fn test_display_order_newest_first() {
        let history = unordered_history();
        let sections: Vec<_> = history.displayed().iter().map(|r| r.section.as_str()).collect();
        assert_eq!(sections, ["C", "B", "A"]);
        assert_eq!(history.display_order(), [2, 0, 1]);
    }

    #[test]
    fn test_display_order_ties_keep_insertion_order() {
        let history = History::open(MemoryStore::with_records(vec![
            sample("first", 1, 100),
            sample("second", 1, 100),
        ]));
        assert_eq!(history.display_order(), [0, 1]);
    }

    #[test]
    fn test_delete_maps_display_index() {
        let mut history = unordered_history();

        // Display position 1 is "B", stored at position 0
        let removed = history.delete_displayed(1).unwrap();
        assert_eq!(removed.section, "B");

        let remaining: Vec<_> = history.records().iter().map(|r| r.section.as_str()).collect();
        assert_eq!(remaining, ["A", "C"]);
    }

    #[test]
    fn test_delete_every_position() {
        for display_index in 0..3 {
            let mut history = unordered_history();
            let expected = history.get_displayed(display_index).unwrap().clone();

            let removed = history.delete_displayed(display_index).unwrap();
            assert_eq!(removed, expected);
            assert_eq!(history.len(), 2);
            assert!(!history.records().contains(&expected));
        }
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut history = unordered_history();
        let err = history.delete_displayed(3).unwrap_err();
        assert!(matches!(err, PracticeError::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_append_persists() {
        let mut history = History::open(MemoryStore::new());
        history.append(sample("Reading", 1_000, 100)).unwrap();
        history.append(sample("Writing", 2_000, 50)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.store.records().len(), 2);
        assert_eq!(history.rows()[0].section, "Reading");
    }

    #[test]
    fn test_stats_recompute_after_delete() {
        let mut history = unordered_history();
        assert_eq!(history.stats().best_ms, Some(1_000));

        // "A" is oldest, so it is last in display order
        history.delete_displayed(2).unwrap();
        assert_eq!(history.stats().best_ms, Some(2_000));

        history.clear().unwrap();
        assert_eq!(history.stats().count, 0);
        assert_eq!(history.stats().best_ms, None);
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let mut store = MockRecordStore::new();
        store
            .expect_load()
            .returning(|| Err(PracticeError::Storage("unreachable".to_string())));

        let history = History::open(store);
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_failure_keeps_previous_state() {
        let mut store = MockRecordStore::new();
        store
            .expect_load()
            .returning(|| Ok(vec![sample("Reading", 1_000, 100)]));
        store
            .expect_save()
            .times(2)
            .returning(|_| Err(PracticeError::Storage("read-only".to_string())));

        let mut history = History::open(store);
        assert!(history.append(sample("Writing", 2_000, 200)).is_err());
        assert!(history.delete_displayed(0).is_err());
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].section, "Reading");
    }

    #[test]
    fn test_rows_are_formatted() {
        let history = History::open(MemoryStore::with_records(vec![sample("Reading", 3_661_000, 100)]));
        let rows = history.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].duration, "01:01:01");
        assert_eq!(rows[0].timestamp, history.records()[0].format_timestamp());
    }
}
