//! Session timing.
//!
//! Provides the practice timer:
//! - Stopwatch (elapsed) and countdown modes
//! - Pause/resume without double counting
//! - Overtime detection once a countdown passes zero
//! - Clock-face formatting

mod format;
mod state;

pub use format::{format_duration, minutes_to_ms, parse_minutes, MS_PER_MINUTE};
pub use state::{SessionTimer, TimerMode, TimerState};
