//! practimer - a practice-session timer
//!
//! This crate provides a wall-clock based session timer (stopwatch or
//! countdown with overtime), a persisted history of completed sessions with
//! summary statistics, an interactive terminal UI, and one-shot
//! subcommands for inspecting the history.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{PracticeError, UserInputError};
pub use features::history::{History, SessionRecord};
pub use features::practice::{Command, PracticeController};
pub use features::timer::SessionTimer;
