// Rust guideline compliant 2026-10-12

//! Per-sprint delivery metrics.
//!
//! Relevant sprints are collected from every issue's current sprint and
//! closed-sprint history, deduplicated by id and restricted to active or
//! closed sprints. Each report counts over the full issue list.

use crate::models::{Issue, Sprint, SprintId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Delivery metrics for one sprint, historical or projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintReport {
    /// Sprint name, or the step number for projected sprints.
    pub sprint_name: String,
    /// Issues committed to the sprint.
    pub committed_issues: usize,
    /// Issues completed in the sprint.
    pub completed_issues: usize,
    /// Issues created during the sprint.
    pub created_issues: usize,
    /// Issues that existed by the end of the sprint.
    pub total_issues: usize,
    /// Issues resolved by the end of the sprint.
    pub total_closed_issues: usize,
    /// Whether the sprint is closed.
    pub is_closed: bool,
}

impl SprintReport {
    /// Computes the report for `sprint` over `issues`.
    pub fn for_sprint(sprint: &Sprint, issues: &[Issue]) -> Self {
        let count = |predicate: fn(&Issue, &Sprint) -> bool| {
            issues.iter().filter(|issue| predicate(issue, sprint)).count()
        };

        Self {
            sprint_name: sprint.name.clone(),
            committed_issues: count(Issue::committed_in),
            completed_issues: count(Issue::completed_in),
            created_issues: count(Issue::created_in),
            total_issues: count(Issue::created_before_or_in),
            total_closed_issues: count(Issue::closed_before_or_in),
            is_closed: sprint.is_closed(),
        }
    }
}

/// Builds one report per relevant sprint, ordered by start date.
///
/// Sprints without a start date are placed after all dated sprints. Sprints
/// with equal start dates are ordered by id.
pub fn prepare_sprint_reports(issues: &[Issue]) -> Vec<SprintReport> {
    relevant_sprints(issues)
        .into_iter()
        .map(|sprint| SprintReport::for_sprint(sprint, issues))
        .collect()
}

/// Collects distinct active or closed sprints, sorted for reporting.
pub fn relevant_sprints(issues: &[Issue]) -> Vec<&Sprint> {
    let mut by_id: BTreeMap<SprintId, &Sprint> = BTreeMap::new();
    for issue in issues {
        for sprint in issue.sprint.iter().chain(issue.closed_sprints.iter()) {
            by_id.entry(sprint.id).or_insert(sprint);
        }
    }

    let mut sprints: Vec<&Sprint> = by_id
        .into_values()
        .filter(|sprint| sprint.is_closed_or_active())
        .collect();
    sprints.sort_by(|a, b| compare_by_start(a, b));
    sprints
}

fn compare_by_start(a: &Sprint, b: &Sprint) -> Ordering {
    match (a.start_date, b.start_date) {
        (Some(a_start), Some(b_start)) => a_start.cmp(&b_start),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}
