// Rust guideline compliant 2026-10-16

//! Implementation of the `epicast report` command.
//!
//! Loads the selected epics from a snapshot directory, builds the merged
//! report and prints it with the chosen formatter.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use epicast_app::{
    Command, EpicReportInteractor, ErrorEnvelope, ReportSession, SessionState, SnapshotDir,
};
use epicast_core::{GrowthFactor, SprintWindow};
use std::path::Path;

/// Builds and prints the report for the given epics.
///
/// # Arguments
///
/// * `epic_keys` - Epics to merge into one report
/// * `snapshot_dir` - Directory holding `<KEY>.json` snapshots
/// * `sprint_window` - Closed sprints used for velocity
/// * `growth_factor` - Projected backlog growth
/// * `json` - Whether output is JSON; failures then also print an error envelope
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the snapshot directory does not exist or any epic
/// fails to load.
pub fn execute(
    epic_keys: Vec<String>,
    snapshot_dir: &Path,
    sprint_window: SprintWindow,
    growth_factor: GrowthFactor,
    json: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if !snapshot_dir.is_dir() {
        bail!(
            "Snapshot directory '{}' not found. Use --snapshots or set snapshot_dir.",
            snapshot_dir.display()
        );
    }

    let state = load(epic_keys, snapshot_dir, sprint_window, growth_factor);

    if let Some(error) = &state.error {
        if let Some(envelope) = error_output(error, json, formatter) {
            println!("{}", envelope);
        }
        bail!("{}", error.message);
    }

    match &state.report {
        Some(loaded) => println!("{}", formatter.format_report(loaded)),
        None => bail!("No epics selected"),
    }

    Ok(())
}

/// Returns the stdout rendering of a load failure.
///
/// Only JSON consumers get one; otherwise the error reaches the user once,
/// through the returned `Err`.
pub fn error_output(
    error: &ErrorEnvelope,
    json: bool,
    formatter: &dyn OutputFormatter,
) -> Option<String> {
    json.then(|| formatter.format_error(error))
}

/// Runs the selection through a report session and returns its final state.
pub fn load(
    epic_keys: Vec<String>,
    snapshot_dir: &Path,
    sprint_window: SprintWindow,
    growth_factor: GrowthFactor,
) -> std::sync::Arc<SessionState> {
    let interactor = EpicReportInteractor::new(SnapshotDir::new(snapshot_dir));
    let initial = SessionState {
        sprint_window,
        growth_factor,
        ..SessionState::default()
    };
    let mut session = ReportSession::new(interactor, initial);
    session.subscribe(|state| {
        tracing::debug!(
            epics = state.epic_keys.len(),
            loaded = state.report.is_some(),
            failed = state.error.is_some(),
            "Session state updated"
        );
    });

    session.dispatch(Command::SelectEpics(epic_keys))
}
