//! Core abstractions for practimer.
//!
//! This module provides the clock seam and timestamp helpers shared across
//! features.

mod clock;
mod datetime;

pub use clock::{Clock, ManualClock, SystemClock};
pub use datetime::{format_timestamp, parse_timestamp};
