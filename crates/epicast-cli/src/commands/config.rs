// Rust guideline compliant 2026-10-16

//! Implementation of the `epicast config` command.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use epicast_core::config::CONFIG_FILE_NAME;
use epicast_core::Config;
use std::path::Path;

/// Loads the effective configuration.
///
/// An explicit `--config` path must exist. Without one, `epicast.toml` in the
/// working directory is used when present and defaults otherwise.
///
/// # Errors
///
/// Returns an error if an explicit path is missing, or the file or
/// environment overrides are invalid.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_required(path)?,
        None => Config::load(Path::new(CONFIG_FILE_NAME))?,
    };
    Ok(config)
}

/// Prints the effective configuration, optionally writing it to a file.
///
/// # Arguments
///
/// * `config` - Configuration after file and environment overrides
/// * `write_to` - Optional path to save the configuration as TOML
/// * `force` - Overwrite an existing file at `write_to`
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the target exists without `force` or cannot be written.
pub fn execute(
    config: &Config,
    write_to: Option<&Path>,
    force: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if let Some(path) = write_to {
        if path.exists() && !force {
            bail!(
                "'{}' already exists. Use --force to overwrite.",
                path.display()
            );
        }
        config.save(path)?;
        tracing::info!(path = %path.display(), "Wrote config file");
    }

    println!("{}", formatter.format_config(config));
    Ok(())
}
