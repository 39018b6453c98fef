//! Command implementations.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod history;
mod stats;

pub use completions::completions;
pub use config::config;
pub use history::{clear, delete, history};
pub use stats::stats;
