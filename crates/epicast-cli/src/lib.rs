// Rust guideline compliant 2026-10-16

//! Epicast CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod chart;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color};
