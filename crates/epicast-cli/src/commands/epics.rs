// Rust guideline compliant 2026-10-16

//! Implementation of the `epicast epics` command.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use epicast_app::{EpicSource, SnapshotDir};
use epicast_core::Epic;
use std::path::Path;

/// Lists the epics that have a snapshot.
///
/// Snapshots without epic metadata are listed by key alone.
///
/// # Errors
///
/// Returns an error if the snapshot directory cannot be read or a snapshot
/// is malformed.
pub fn execute(snapshot_dir: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    if !snapshot_dir.is_dir() {
        bail!(
            "Snapshot directory '{}' not found. Use --snapshots or set snapshot_dir.",
            snapshot_dir.display()
        );
    }

    let epics = list(&SnapshotDir::new(snapshot_dir))?;
    println!("{}", formatter.format_epics(&epics));
    Ok(())
}

/// Loads epic metadata for every snapshot in the directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or a snapshot is malformed.
pub fn list(source: &SnapshotDir) -> Result<Vec<Epic>> {
    let mut epics = Vec::new();
    for key in source.list_keys()? {
        epics.push(source.epic(&key)?);
    }
    Ok(epics)
}
