//! Practice history.
//!
//! Completed sessions are stored in insertion order and shown newest first.

mod list;
mod record;

pub use list::{History, HistoryRow};
pub use record::SessionRecord;
