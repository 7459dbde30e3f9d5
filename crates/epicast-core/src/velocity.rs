// Rust guideline compliant 2026-10-12

//! Trailing-window velocity over closed sprints.

use crate::settings::SprintWindow;
use crate::sprint_report::SprintReport;
use serde::Serialize;
use std::fmt;

/// Average number of issues per sprint.
///
/// A window without closed sprints has no mean. That case is its own variant
/// so callers must match on it instead of comparing a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Velocity {
    /// No closed sprint in the window.
    Unavailable,
    /// Mean issues per closed sprint.
    PerSprint(f64),
}

impl Velocity {
    /// Returns the mean, if available.
    pub fn per_sprint(self) -> Option<f64> {
        match self {
            Velocity::Unavailable => None,
            Velocity::PerSprint(value) => Some(value),
        }
    }

    /// Returns the mean only if it is a finite, strictly positive number.
    pub fn positive(self) -> Option<f64> {
        self.per_sprint()
            .filter(|value| value.is_finite() && *value > 0.0)
    }

    fn mean(values: impl Iterator<Item = usize>, count: usize) -> Self {
        if count == 0 {
            return Velocity::Unavailable;
        }
        let sum: usize = values.sum();
        Velocity::PerSprint(sum as f64 / count as f64)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Velocity::Unavailable => f.write_str("n/a"),
            Velocity::PerSprint(value) => write!(f, "{:.2}", value),
        }
    }
}

/// Burndown and backlog velocity for a window of closed sprints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityReport {
    /// Mean issues completed per sprint.
    pub burndown: Velocity,
    /// Mean issues created per sprint.
    pub backlog: Velocity,
    /// Number of closed sprints the means were taken over.
    pub sprints_counted: usize,
}

impl VelocityReport {
    /// Report for a window without closed sprints.
    pub const UNAVAILABLE: VelocityReport = VelocityReport {
        burndown: Velocity::Unavailable,
        backlog: Velocity::Unavailable,
        sprints_counted: 0,
    };

    /// Returns true if no closed sprint contributed.
    pub fn is_unavailable(&self) -> bool {
        self.sprints_counted == 0
    }
}

/// Computes velocity over the trailing `window` of closed sprint reports.
///
/// Open sprints are skipped before the window is applied, so "last three"
/// means the last three closed sprints.
pub fn prepare_velocity_report(reports: &[SprintReport], window: SprintWindow) -> VelocityReport {
    let closed: Vec<&SprintReport> = reports.iter().filter(|report| report.is_closed).collect();
    let skip = match window.limit() {
        Some(limit) => closed.len().saturating_sub(limit),
        None => 0,
    };
    let window = &closed[skip..];

    if window.is_empty() {
        return VelocityReport::UNAVAILABLE;
    }

    VelocityReport {
        burndown: Velocity::mean(window.iter().map(|r| r.completed_issues), window.len()),
        backlog: Velocity::mean(window.iter().map(|r| r.created_issues), window.len()),
        sprints_counted: window.len(),
    }
}
