//! The practice session manager.
//!
//! Composes a [`SessionTimer`](crate::features::timer::SessionTimer) with a
//! [`History`](crate::features::history::History) and exposes the command
//! and view surface a presentation layer binds to.

mod command;
mod controller;
mod view;

pub use command::{Command, PresetChoice};
pub use controller::PracticeController;
pub use view::{ButtonState, ViewModel};
