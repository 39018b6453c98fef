//! Feature implementations for practimer.
//!
//! - Session timing (stopwatch and countdown with overtime)
//! - History of completed sessions
//! - Statistics over that history
//! - The practice controller tying them together for a UI

pub mod history;
pub mod practice;
pub mod stats;
pub mod timer;
