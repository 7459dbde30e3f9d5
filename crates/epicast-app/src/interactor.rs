// Rust guideline compliant 2026-10-14

//! Multi-epic report requests.

use crate::error::{AppError, Result};
use crate::source::EpicSource;
use epicast_core::{prepare_epic_report, Epic, EpicReport, GrowthFactor, Issue, SprintWindow};
use rayon::prelude::*;
use serde::Serialize;

/// Parameters of one report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicReportRequest {
    /// Epics whose issues are merged into one report.
    pub epic_keys: Vec<String>,
    /// Closed sprints used for velocity.
    pub sprint_window: SprintWindow,
    /// Backlog growth applied during projection.
    pub growth_factor: GrowthFactor,
}

impl EpicReportRequest {
    /// Creates a request with default settings.
    pub fn new(epic_keys: Vec<String>) -> Self {
        Self {
            epic_keys,
            sprint_window: SprintWindow::default(),
            growth_factor: GrowthFactor::default(),
        }
    }
}

/// A computed report together with the epics it covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedReport {
    /// Epics in request order.
    pub epics: Vec<Epic>,
    /// Report over the merged issues.
    pub report: EpicReport,
}

/// Loads epics from a source and assembles their combined report.
#[derive(Debug, Clone)]
pub struct EpicReportInteractor<S> {
    source: S,
}

impl<S: EpicSource> EpicReportInteractor<S> {
    /// Creates an interactor over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads every requested epic and builds one report over their issues.
    ///
    /// Epics load in parallel. Repeated keys are loaded once. Issues are
    /// merged in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No epic key was given
    /// - Any epic fails to load; no partial report is produced
    pub fn run(&self, request: &EpicReportRequest) -> Result<LoadedReport> {
        let keys = unique_keys(&request.epic_keys);
        if keys.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one epic key is required".to_string(),
            ));
        }

        let loaded: Vec<(Epic, Vec<Issue>)> = keys
            .par_iter()
            .map(|key| self.source.load(key))
            .collect::<Result<_>>()
            .inspect_err(|err| tracing::warn!(error = %err, "Epic load failed"))?;

        let mut epics = Vec::with_capacity(loaded.len());
        let mut issues = Vec::new();
        for (epic, epic_issues) in loaded {
            epics.push(epic);
            issues.extend(epic_issues);
        }

        let report = prepare_epic_report(&issues, request.sprint_window, request.growth_factor);
        tracing::info!(
            epics = epics.len(),
            issues = issues.len(),
            projected = report.projected_reports().len(),
            "Built epic report"
        );

        Ok(LoadedReport { epics, report })
    }
}

fn unique_keys(keys: &[String]) -> Vec<&str> {
    let mut unique: Vec<&str> = Vec::with_capacity(keys.len());
    for key in keys.iter().map(|key| key.trim()).filter(|key| !key.is_empty()) {
        if !unique.contains(&key) {
            unique.push(key);
        }
    }
    unique
}
