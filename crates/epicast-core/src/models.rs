// Rust guideline compliant 2026-10-12

//! Core data models for Epicast.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Resolution status of an issue.
///
/// Only the closed state matters for reporting, every other upstream status
/// collapses into `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue is in any non-closed status.
    Any,
    /// Issue is closed.
    Closed,
}

/// Lifecycle state of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintState {
    /// Sprint is currently running.
    Active,
    /// Sprint has been completed.
    Closed,
    /// Sprint is planned but not started.
    Future,
}

/// Upstream identifier of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SprintId(pub u64);

impl fmt::Display for SprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A time-boxed unit of work.
///
/// Two sprints are the same sprint when their ids match, regardless of the
/// other fields. Issues carry their own copies of sprint records and those
/// copies are not guaranteed to agree field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    /// Unique sprint identifier.
    pub id: SprintId,
    /// Display name.
    pub name: String,
    /// Current lifecycle state.
    pub state: SprintState,
    /// Planned start.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Planned end.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Actual completion time.
    #[serde(default)]
    pub complete_date: Option<DateTime<Utc>>,
}

impl Sprint {
    /// Creates a sprint without any dates.
    pub fn new(id: u64, name: impl Into<String>, state: SprintState) -> Self {
        Self {
            id: SprintId(id),
            name: name.into(),
            state,
            start_date: None,
            end_date: None,
            complete_date: None,
        }
    }

    /// Returns true if the sprint state is `Closed`.
    pub fn is_closed(&self) -> bool {
        self.state == SprintState::Closed
    }

    /// Returns true if the sprint state is `Active`.
    pub fn is_active(&self) -> bool {
        self.state == SprintState::Active
    }

    /// Returns true for sprints that can carry completed work.
    pub fn is_closed_or_active(&self) -> bool {
        self.is_closed() || self.is_active()
    }

    /// End date used when searching for the latest sprint; missing is epoch.
    fn end_or_epoch(&self) -> DateTime<Utc> {
        self.end_date.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl PartialEq for Sprint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sprint {}

impl Hash for Sprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A top-level unit of work grouping many issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    /// Upstream identifier.
    pub id: String,
    /// Human-facing key such as `PRJ-42`.
    pub key: String,
    /// Epic name.
    #[serde(default)]
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: String,
    /// Whether the epic is marked done upstream.
    #[serde(default)]
    pub done: bool,
}

impl Epic {
    /// Creates an epic known only by its key.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            name: key.clone(),
            key,
            summary: String::new(),
            done: false,
        }
    }
}

/// A single tracked issue together with its sprint membership history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Upstream identifier.
    pub id: String,
    /// Human-facing key such as `PRJ-101`.
    pub key: String,
    /// Resolution status.
    pub status: IssueStatus,
    /// Creation time.
    pub created_date: DateTime<Utc>,
    /// Resolution time, if resolved.
    #[serde(default)]
    pub resolution_date: Option<DateTime<Utc>>,
    /// Sprint the issue currently belongs to.
    #[serde(default)]
    pub sprint: Option<Sprint>,
    /// Sprints the issue was part of when they closed, in upstream order.
    #[serde(default)]
    pub closed_sprints: Vec<Sprint>,
}

impl Issue {
    /// Returns true if the issue is closed.
    pub fn is_closed(&self) -> bool {
        self.status == IssueStatus::Closed
    }

    /// Returns true if `sprint` is the issue's current sprint.
    pub fn is_in_sprint(&self, sprint: &Sprint) -> bool {
        self.sprint
            .as_ref()
            .is_some_and(|current| current.id == sprint.id)
    }

    /// Returns the closed sprint with the latest end date.
    ///
    /// Sprints without an end date rank as epoch zero. Among equal end dates
    /// the earliest entry in the history wins.
    pub fn last_closed_sprint(&self) -> Option<&Sprint> {
        self.closed_sprints.iter().reduce(|latest, sprint| {
            if sprint.end_or_epoch() > latest.end_or_epoch() {
                sprint
            } else {
                latest
            }
        })
    }

    /// Returns true if the issue was committed to `sprint`.
    pub fn committed_in(&self, sprint: &Sprint) -> bool {
        self.closed_sprints.iter().any(|closed| closed.id == sprint.id) || self.is_in_sprint(sprint)
    }

    /// Returns true if the issue was completed in `sprint`.
    pub fn completed_in(&self, sprint: &Sprint) -> bool {
        if !self.is_closed() {
            return false;
        }
        self.last_closed_sprint()
            .is_some_and(|last| last.id == sprint.id)
            || self.is_in_sprint(sprint)
    }

    /// Returns true if the issue was created between the sprint's start and end.
    pub fn created_in(&self, sprint: &Sprint) -> bool {
        let (Some(start), Some(end)) = (sprint.start_date, sprint.end_date) else {
            return false;
        };
        self.created_date >= start && self.created_date <= end
    }

    /// Returns true if the issue existed by the end of `sprint`.
    ///
    /// Open-ended sprints count every issue.
    pub fn created_before_or_in(&self, sprint: &Sprint) -> bool {
        match sprint.end_date {
            Some(end) => self.created_date <= end,
            None => true,
        }
    }

    /// Returns true if the issue was resolved by the end of `sprint`.
    pub fn closed_before_or_in(&self, sprint: &Sprint) -> bool {
        match (sprint.end_date, self.resolution_date) {
            (Some(end), Some(resolved)) => resolved <= end,
            _ => false,
        }
    }
}

/// Parses an upstream timestamp.
///
/// Accepts RFC 3339 (`2023-05-02T10:15:30.000Z`) and the offset form without a
/// colon used by Jira issue fields (`2023-05-02T10:15:30.000+0300`).
///
/// # Errors
///
/// Returns `Error::InvalidDate` if neither format matches.
pub fn parse_timestamp(value: &str) -> crate::Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }
    Err(crate::Error::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn sprint(id: u64, start: Option<u32>, end: Option<u32>) -> Sprint {
        Sprint {
            start_date: start.map(at),
            end_date: end.map(at),
            ..Sprint::new(id, format!("Sprint {id}"), SprintState::Closed)
        }
    }

    fn issue(created: u32) -> Issue {
        Issue {
            id: "1".to_string(),
            key: "PRJ-1".to_string(),
            status: IssueStatus::Any,
            created_date: at(created),
            resolution_date: None,
            sprint: None,
            closed_sprints: Vec::new(),
        }
    }

    #[test]
    fn test_sprint_equality_uses_id_only() {
        let a = sprint(7, Some(1), Some(14));
        let mut b = sprint(7, None, None);
        b.name = "Renamed".to_string();
        assert_eq!(a, b);
        assert_ne!(a, sprint(8, Some(1), Some(14)));
    }

    #[test]
    fn test_last_closed_sprint_prefers_latest_end() {
        let mut issue = issue(1);
        issue.closed_sprints = vec![sprint(1, Some(1), Some(10)), sprint(2, Some(11), Some(20)), sprint(3, None, None)];
        assert_eq!(issue.last_closed_sprint().map(|s| s.id), Some(SprintId(2)));
    }

    #[test]
    fn test_last_closed_sprint_ties_keep_first() {
        let mut issue = issue(1);
        issue.closed_sprints = vec![sprint(4, None, None), sprint(5, None, None)];
        assert_eq!(issue.last_closed_sprint().map(|s| s.id), Some(SprintId(4)));
    }

    #[test]
    fn test_completed_requires_closed_status() {
        let mut issue = issue(1);
        let s = sprint(1, Some(1), Some(10));
        issue.sprint = Some(s.clone());
        assert!(issue.committed_in(&s));
        assert!(!issue.completed_in(&s));
        issue.status = IssueStatus::Closed;
        assert!(issue.completed_in(&s));
    }

    #[test]
    fn test_created_in_requires_both_bounds() {
        let issue = issue(5);
        assert!(issue.created_in(&sprint(1, Some(5), Some(10))));
        assert!(issue.created_in(&sprint(1, Some(1), Some(5))));
        assert!(!issue.created_in(&sprint(1, None, Some(10))));
        assert!(!issue.created_in(&sprint(1, Some(1), None)));
    }

    #[test]
    fn test_created_before_or_in_open_ended() {
        let issue = issue(20);
        assert!(issue.created_before_or_in(&sprint(1, Some(1), None)));
        assert!(!issue.created_before_or_in(&sprint(1, Some(1), Some(10))));
    }

    #[test]
    fn test_closed_before_or_in() {
        let mut issue = issue(1);
        let s = sprint(1, Some(1), Some(10));
        assert!(!issue.closed_before_or_in(&s));
        issue.resolution_date = Some(at(10));
        assert!(issue.closed_before_or_in(&s));
        assert!(!issue.closed_before_or_in(&sprint(1, Some(1), None)));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2023-05-02T10:15:30.000Z").unwrap();
        let jira = parse_timestamp("2023-05-02T13:15:30.000+0300").unwrap();
        assert_eq!(rfc, jira);
        assert!(parse_timestamp("yesterday").is_err());
    }
}
