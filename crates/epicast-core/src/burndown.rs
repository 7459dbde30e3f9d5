// Rust guideline compliant 2026-10-12

//! Burndown projection.
//!
//! Simulates future sprints at a constant burndown velocity while the backlog
//! grows by a fixed fraction of that velocity. Each step narrows the gap
//! between total and closed issues by `velocity * (1 - growth)`, which is
//! positive for every `GrowthFactor`, so the simulation always ends.

use crate::epic_report::IssuesReport;
use crate::settings::GrowthFactor;
use crate::sprint_report::SprintReport;
use crate::velocity::Velocity;

/// Projects sprints until the simulated backlog is fully closed.
///
/// # Arguments
///
/// * `issues` - Current total and closed issue counts
/// * `burndown` - Issues completed per sprint
/// * `growth` - Backlog growth as a fraction of `burndown`
///
/// # Returns
///
/// One synthetic report per simulated sprint, named `1`, `2`, ... Empty when
/// the velocity is unavailable or not positive.
pub fn project_burndown(
    issues: &IssuesReport,
    burndown: Velocity,
    growth: GrowthFactor,
) -> Vec<SprintReport> {
    let Some(velocity) = burndown.positive() else {
        tracing::debug!(%burndown, "No positive velocity, skipping projection");
        return Vec::new();
    };

    let growth = growth.value();
    let per_sprint = velocity.floor() as usize;
    let mut total = issues.total_count as f64;
    let mut closed = issues.closed_count as f64;
    let mut projected = Vec::new();

    while closed < total {
        closed += velocity;
        total += velocity * growth;
        if closed > total {
            closed = total;
        }

        projected.push(SprintReport {
            sprint_name: (projected.len() + 1).to_string(),
            committed_issues: per_sprint,
            completed_issues: per_sprint,
            created_issues: 0,
            total_issues: total.floor() as usize,
            total_closed_issues: closed.floor() as usize,
            is_closed: false,
        });
    }

    tracing::debug!(
        sprints = projected.len(),
        velocity,
        growth,
        "Projected burndown"
    );
    projected
}
