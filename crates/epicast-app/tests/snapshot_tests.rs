// Rust guideline compliant 2026-10-14

//! Integration tests for loading snapshot directories into reports.

use epicast_app::{
    Command, EpicReportInteractor, EpicReportRequest, ErrorCode, ReportSession, SessionState,
    SnapshotDir,
};
use epicast_core::{GrowthFactor, SprintWindow, Velocity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CHECKOUT: &str = r#"{
    "epic": {"id": 501, "key": "PRJ-5", "name": "Checkout", "summary": "New checkout flow", "done": false},
    "issues": [
        {"id": "1", "key": "PRJ-101", "fields": {
            "status": {"name": "Closed"},
            "created": "2024-01-02T10:00:00.000+0000",
            "resolutiondate": "2024-01-18T10:00:00.000+0000",
            "closedSprints": [{"id": 1, "name": "Sprint 1", "state": "closed",
                "startDate": "2024-01-08T09:00:00.000Z", "endDate": "2024-01-22T09:00:00.000Z"}]
        }},
        {"id": "2", "key": "PRJ-102", "fields": {
            "status": {"name": "Closed"},
            "created": "2024-01-03T10:00:00.000+0000",
            "resolutiondate": "2024-01-19T10:00:00.000+0000",
            "closedSprints": [{"id": 1, "name": "Sprint 1", "state": "closed",
                "startDate": "2024-01-08T09:00:00.000Z", "endDate": "2024-01-22T09:00:00.000Z"}]
        }},
        {"id": "3", "key": "PRJ-103", "fields": {
            "status": {"name": "To Do"},
            "created": "2024-01-10T10:00:00.000+0000",
            "sprint": {"id": 2, "name": "Sprint 2", "state": "active",
                "startDate": "2024-01-22T09:00:00.000Z", "endDate": "2024-02-05T09:00:00.000Z"}
        }}
    ]
}"#;

const PAYMENTS: &str = r#"{
    "issues": [
        {"id": "4", "key": "PAY-1", "fields": {
            "status": {"name": "In Progress"},
            "created": "2024-01-25T10:00:00.000+0000"
        }},
        {"id": "5", "key": "PAY-2", "fields": {
            "status": {"name": "To Do"},
            "created": "2024-01-26T10:00:00.000+0000"
        }}
    ]
}"#;

fn write_snapshots(dir: &Path) {
    fs::write(dir.join("PRJ-5.json"), CHECKOUT).expect("Failed to write PRJ-5 snapshot");
    fs::write(dir.join("PAY-1.json"), PAYMENTS).expect("Failed to write PAY-1 snapshot");
}

#[test]
fn test_report_from_single_snapshot() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_snapshots(temp_dir.path());
    let interactor = EpicReportInteractor::new(SnapshotDir::new(temp_dir.path()));

    let mut request = EpicReportRequest::new(vec!["PRJ-5".to_string()]);
    request.growth_factor = GrowthFactor::Zero;
    let loaded = interactor.run(&request).expect("Report should build");

    assert_eq!(loaded.epics[0].name, "Checkout");
    let report = &loaded.report;
    assert_eq!(report.issues_report.total_count, 3);
    assert_eq!(report.issues_report.closed_count, 2);
    assert_eq!(report.sprint_reports.len(), 2);
    assert_eq!(report.sprint_reports[0].completed_issues, 2);
    assert_eq!(report.sprint_reports[1].committed_issues, 1);
    assert_eq!(report.velocity_report.burndown, Velocity::PerSprint(2.0));

    let projected = report.projected_reports();
    assert_eq!(projected.len(), 1);
    assert_eq!(projected[0].total_closed_issues, 3);
}

#[test]
fn test_report_merges_epics() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_snapshots(temp_dir.path());
    let interactor = EpicReportInteractor::new(SnapshotDir::new(temp_dir.path()));

    let mut request = EpicReportRequest::new(vec!["PRJ-5".to_string(), "PAY-1".to_string()]);
    request.sprint_window = SprintWindow::LastThree;
    request.growth_factor = GrowthFactor::Zero;
    let loaded = interactor.run(&request).expect("Report should build");

    assert_eq!(loaded.epics.len(), 2);
    assert_eq!(loaded.epics[1].key, "PAY-1");
    assert_eq!(loaded.report.issues_report.total_count, 5);
    assert_eq!(loaded.report.issues_report.open_count, 3);
    assert_eq!(loaded.report.sprint_reports[1].total_issues, 5);

    let closed: Vec<_> = loaded
        .report
        .projected_reports()
        .iter()
        .map(|r| r.total_closed_issues)
        .collect();
    assert_eq!(closed, vec![4, 5]);
}

#[test]
fn test_missing_epic_fails_whole_request() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_snapshots(temp_dir.path());
    let interactor = EpicReportInteractor::new(SnapshotDir::new(temp_dir.path()));

    let request = EpicReportRequest::new(vec!["PRJ-5".to_string(), "NOPE-1".to_string()]);
    let err = interactor.run(&request).expect_err("Missing epic should fail");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_session_reloads_from_snapshots() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_snapshots(temp_dir.path());
    let interactor = EpicReportInteractor::new(SnapshotDir::new(temp_dir.path()));
    let mut session = ReportSession::new(interactor, SessionState::default());

    session.dispatch(Command::SelectEpics(vec!["PRJ-5".to_string()]));
    let state = session.dispatch(Command::SelectGrowthFactor(GrowthFactor::Half));

    let report = &state.report.as_ref().expect("Report should load").report;
    assert_eq!(report.growth_factor, GrowthFactor::Half);
    let last = report.burndown_reports.last().expect("Projection expected");
    assert_eq!(last.total_closed_issues, last.total_issues);
}
