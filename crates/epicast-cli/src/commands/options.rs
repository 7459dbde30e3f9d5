// Rust guideline compliant 2026-10-16

//! Implementation of the `epicast options` command.

use crate::OutputFormatter;
use anyhow::Result;
use epicast_app::{growth_factor_menu, sprint_window_menu};
use epicast_core::Config;

/// Prints the selectable velocity windows and growth factors.
///
/// # Errors
///
/// This command does not fail; the signature matches the other commands.
pub fn execute(config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    println!(
        "{}",
        formatter.format_options(&sprint_window_menu(), &growth_factor_menu(), config)
    );
    Ok(())
}
