// Rust guideline compliant 2026-10-12

//! Property-based tests for the report engine.
//!
//! These tests validate properties that should hold for any issue snapshot:
//! count invariants, sprint ordering, explicit unavailable velocity, bounded
//! projection and deterministic assembly.

use chrono::{DateTime, TimeZone, Utc};
use epicast_core::{
    prepare_epic_report, prepare_velocity_report, project_burndown, GrowthFactor, Issue,
    IssueStatus, IssuesReport, Sprint, SprintState, SprintWindow, Velocity,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(i64::from(d))
}

fn arb_state() -> impl Strategy<Value = SprintState> {
    prop_oneof![
        Just(SprintState::Active),
        Just(SprintState::Closed),
        Just(SprintState::Future),
    ]
}

fn arb_window() -> impl Strategy<Value = SprintWindow> {
    prop_oneof![
        Just(SprintWindow::All),
        Just(SprintWindow::LastThree),
        Just(SprintWindow::LastSix),
    ]
}

fn arb_growth() -> impl Strategy<Value = GrowthFactor> {
    prop_oneof![
        Just(GrowthFactor::Zero),
        Just(GrowthFactor::OneFifth),
        Just(GrowthFactor::OneThird),
        Just(GrowthFactor::Half),
    ]
}

/// Generates a pool of sprints with ids 1..=n and names `S<id>`.
fn arb_sprints() -> impl Strategy<Value = Vec<Sprint>> {
    prop::collection::vec(
        (arb_state(), prop::option::weighted(0.85, 0u32..200), 1u32..21),
        1..10,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (state, start, length))| Sprint {
                start_date: start.map(day),
                end_date: start.map(|s| day(s + length)),
                ..Sprint::new(index as u64 + 1, format!("S{}", index + 1), state)
            })
            .collect()
    })
}

fn arb_snapshot() -> impl Strategy<Value = Vec<Issue>> {
    arb_sprints().prop_flat_map(|sprints| {
        let count = sprints.len();
        prop::collection::vec(
            (
                0u32..220,
                any::<bool>(),
                prop::option::of(0u32..60),
                prop::option::of(0..count),
                prop::collection::vec(0..count, 0..3),
            ),
            0..40,
        )
        .prop_map(move |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(n, (created, closed, resolved_after, current, history))| Issue {
                    id: n.to_string(),
                    key: format!("PRJ-{n}"),
                    status: if closed { IssueStatus::Closed } else { IssueStatus::Any },
                    created_date: day(created),
                    resolution_date: resolved_after.map(|after| day(created + after)),
                    sprint: current.map(|i| sprints[i].clone()),
                    closed_sprints: history.into_iter().map(|i| sprints[i].clone()).collect(),
                })
                .collect()
        })
    })
}

proptest! {
    /// For any snapshot, total == closed + open.
    #[test]
    fn prop_issue_counts_balance(
        issues in arb_snapshot(),
        window in arb_window(),
        growth in arb_growth(),
    ) {
        let report = prepare_epic_report(&issues, window, growth);
        let counts = report.issues_report;
        prop_assert_eq!(counts.total_count, counts.closed_count + counts.open_count);
        prop_assert_eq!(counts.total_count, issues.len());
    }

    /// Sprint reports are ordered by start date, undated sprints last.
    #[test]
    fn prop_sprint_reports_sorted_by_start(issues in arb_snapshot()) {
        let starts: HashMap<String, Option<DateTime<Utc>>> = issues
            .iter()
            .flat_map(|issue| issue.sprint.iter().chain(issue.closed_sprints.iter()))
            .map(|sprint| (sprint.name.clone(), sprint.start_date))
            .collect();

        let report = prepare_epic_report(&issues, SprintWindow::All, GrowthFactor::Zero);
        let ordered: Vec<Option<DateTime<Utc>>> = report
            .sprint_reports
            .iter()
            .map(|r| starts[&r.sprint_name])
            .collect();

        for pair in ordered.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a <= b),
                (None, Some(_)) => prop_assert!(false, "undated sprint before a dated one"),
                _ => {}
            }
        }
    }

    /// Velocity is unavailable exactly when no closed sprint was reported.
    #[test]
    fn prop_velocity_unavailable_without_closed_sprints(
        issues in arb_snapshot(),
        window in arb_window(),
    ) {
        let report = prepare_epic_report(&issues, window, GrowthFactor::Zero);
        let any_closed = report.sprint_reports.iter().any(|r| r.is_closed);
        let velocity = prepare_velocity_report(&report.sprint_reports, window);
        if any_closed {
            prop_assert!(velocity.burndown.per_sprint().is_some());
            prop_assert!(velocity.backlog.per_sprint().is_some());
        } else {
            prop_assert_eq!(velocity.burndown, Velocity::Unavailable);
            prop_assert_eq!(velocity.backlog, Velocity::Unavailable);
        }
    }

    /// The projection terminates and ends with a fully closed backlog.
    #[test]
    fn prop_projection_ends_closed(
        total in 0usize..400,
        closed_ratio in 0.0f64..=1.0,
        velocity in 0.1f64..40.0,
        growth in arb_growth(),
    ) {
        let closed = (total as f64 * closed_ratio) as usize;
        let issues = IssuesReport::new(total, closed);
        let projected = project_burndown(&issues, Velocity::PerSprint(velocity), growth);

        let gap = (total - closed) as f64;
        let bound = (gap / (velocity * (1.0 - growth.value()))).ceil() as usize + 1;
        prop_assert!(projected.len() <= bound);

        match projected.last() {
            Some(last) => prop_assert_eq!(last.total_closed_issues, last.total_issues),
            None => prop_assert_eq!(closed, total),
        }
    }

    /// Assembling the same snapshot twice yields the same report.
    #[test]
    fn prop_assembly_is_deterministic(
        issues in arb_snapshot(),
        window in arb_window(),
        growth in arb_growth(),
    ) {
        let first = prepare_epic_report(&issues, window, growth);
        let second = prepare_epic_report(&issues, window, growth);
        prop_assert_eq!(first, second);
    }
}
