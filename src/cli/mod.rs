//! Command-line interface: argument definitions and one-shot commands.

pub mod args;
pub mod commands;
