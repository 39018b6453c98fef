//! Statistics over practice history.
//!
//! Derived, read-only figures recomputed from the full record list:
//! - Session count, total, average and best time
//! - The same figures per section
//! - Terminal bar charts for the per-section breakdown

pub mod metrics;
pub mod visualization;

pub use metrics::{SectionStats, StatsSnapshot, NO_DATA};
pub use visualization::render_bar_chart;
