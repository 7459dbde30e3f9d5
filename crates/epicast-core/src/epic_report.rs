// Rust guideline compliant 2026-10-12

//! Epic report assembly.

use crate::burndown::project_burndown;
use crate::models::Issue;
use crate::settings::{GrowthFactor, SprintWindow};
use crate::sprint_report::{prepare_sprint_reports, SprintReport};
use crate::velocity::{prepare_velocity_report, VelocityReport};
use serde::Serialize;

/// Issue counts for the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IssuesReport {
    /// All issues.
    pub total_count: usize,
    /// Closed issues.
    pub closed_count: usize,
    /// Issues that are not closed.
    pub open_count: usize,
}

impl IssuesReport {
    /// Creates a report from total and closed counts.
    ///
    /// `closed` is capped at `total` so that `total == closed + open` holds.
    pub fn new(total: usize, closed: usize) -> Self {
        let closed = closed.min(total);
        Self {
            total_count: total,
            closed_count: closed,
            open_count: total - closed,
        }
    }
}

/// The aggregate report for one or more epics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpicReport {
    /// Historical sprint reports, ordered by start date.
    pub sprint_reports: Vec<SprintReport>,
    /// Snapshot-wide issue counts.
    pub issues_report: IssuesReport,
    /// Velocity over the configured window.
    pub velocity_report: VelocityReport,
    /// Historical reports followed by projected ones.
    pub burndown_reports: Vec<SprintReport>,
    /// Window used for velocity.
    pub sprint_window: SprintWindow,
    /// Growth factor used for projection.
    pub growth_factor: GrowthFactor,
}

impl EpicReport {
    /// Returns only the projected tail of `burndown_reports`.
    pub fn projected_reports(&self) -> &[SprintReport] {
        &self.burndown_reports[self.sprint_reports.len()..]
    }
}

/// Counts total, closed and open issues.
pub fn prepare_issues_report(issues: &[Issue]) -> IssuesReport {
    let closed = issues.iter().filter(|issue| issue.is_closed()).count();
    IssuesReport::new(issues.len(), closed)
}

/// Builds the full epic report from an issue snapshot.
///
/// # Arguments
///
/// * `issues` - Every issue of the epics being reported on
/// * `window` - Closed sprints used for velocity
/// * `growth` - Backlog growth applied during projection
///
/// # Returns
///
/// The assembled report. The same input always yields the same report.
pub fn prepare_epic_report(
    issues: &[Issue],
    window: SprintWindow,
    growth: GrowthFactor,
) -> EpicReport {
    let issues_report = prepare_issues_report(issues);
    let sprint_reports = prepare_sprint_reports(issues);
    let velocity_report = prepare_velocity_report(&sprint_reports, window);
    let projected = project_burndown(&issues_report, velocity_report.burndown, growth);

    tracing::debug!(
        issues = issues_report.total_count,
        closed = issues_report.closed_count,
        sprints = sprint_reports.len(),
        projected = projected.len(),
        burndown = %velocity_report.burndown,
        "Prepared epic report"
    );

    let mut burndown_reports = Vec::with_capacity(sprint_reports.len() + projected.len());
    burndown_reports.extend(sprint_reports.iter().cloned());
    burndown_reports.extend(projected);

    EpicReport {
        sprint_reports,
        issues_report,
        velocity_report,
        burndown_reports,
        sprint_window: window,
        growth_factor: growth,
    }
}
