// Rust guideline compliant 2026-10-14

//! Jira agile REST payloads and their mapping to domain values.
//!
//! Snapshots are stored in the shape returned by `GET epic/{key}/issue`
//! (fields `sprint,closedSprints,status,created,resolutiondate`), optionally
//! with the `GET epic/{key}` payload under an `epic` key.

use chrono::{DateTime, Utc};
use epicast_core::models::parse_timestamp;
use epicast_core::{Epic, Issue, IssueStatus, Sprint, SprintId, SprintState};
use serde::Deserialize;

/// Upstream identifiers arrive as numbers or strings depending on the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric id.
    Number(u64),
    /// Textual id.
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(value) => value.to_string(),
            RawId::Text(value) => value,
        }
    }
}

/// Body of an epic snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct EpicIssuesResponse {
    /// Epic metadata, when it was captured with the issues.
    #[serde(default)]
    pub epic: Option<EpicDto>,
    /// Issues of the epic.
    #[serde(default)]
    pub issues: Vec<IssueDto>,
}

impl EpicIssuesResponse {
    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the document does not match the payload shape.
    pub fn from_json(content: &str) -> epicast_core::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Maps every issue to a domain value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if any date field is malformed.
    pub fn into_issues(self) -> epicast_core::Result<Vec<Issue>> {
        self.issues.into_iter().map(IssueDto::into_issue).collect()
    }
}

/// Epic payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EpicDto {
    /// Epic id.
    pub id: RawId,
    /// Epic key.
    pub key: String,
    /// Epic name.
    #[serde(default)]
    pub name: String,
    /// Epic summary.
    #[serde(default)]
    pub summary: String,
    /// Done flag.
    #[serde(default)]
    pub done: bool,
}

impl EpicDto {
    /// Maps the payload to an `Epic`.
    pub fn into_epic(self) -> Epic {
        Epic {
            id: self.id.into_string(),
            key: self.key,
            name: self.name,
            summary: self.summary,
            done: self.done,
        }
    }
}

/// Sprint payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    /// Sprint id.
    pub id: u64,
    /// Sprint name.
    pub name: String,
    /// `active`, `closed` or `future`.
    pub state: String,
    /// Start date.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Completion date.
    #[serde(default)]
    pub complete_date: Option<String>,
}

impl SprintDto {
    /// Maps the payload to a `Sprint`. Unknown states map to `Future`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if a present date is malformed.
    pub fn into_sprint(self) -> epicast_core::Result<Sprint> {
        let state = match self.state.as_str() {
            "active" => SprintState::Active,
            "closed" => SprintState::Closed,
            _ => SprintState::Future,
        };
        Ok(Sprint {
            id: SprintId(self.id),
            name: self.name,
            state,
            start_date: parse_optional(self.start_date.as_deref())?,
            end_date: parse_optional(self.end_date.as_deref())?,
            complete_date: parse_optional(self.complete_date.as_deref())?,
        })
    }
}

/// Issue payload.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueDto {
    /// Issue id.
    pub id: RawId,
    /// Issue key.
    pub key: String,
    /// Requested fields.
    #[serde(default)]
    pub fields: Option<IssueFields>,
}

/// Issue fields requested from the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    /// Current sprint.
    #[serde(default)]
    pub sprint: Option<SprintDto>,
    /// Workflow status.
    pub status: Option<StatusDto>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Resolution timestamp.
    #[serde(default)]
    pub resolutiondate: Option<String>,
    /// Sprints the issue was in when they closed.
    #[serde(default, rename = "closedSprints")]
    pub closed_sprints: Option<Vec<SprintDto>>,
}

/// Workflow status payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusDto {
    /// Status name, e.g. `Closed`.
    pub name: String,
}

impl IssueDto {
    /// Maps the payload to an `Issue`.
    ///
    /// A missing creation date becomes the Unix epoch, so the issue counts
    /// toward every sprint's total. A warning is logged when that happens.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` if a present date is malformed.
    pub fn into_issue(self) -> epicast_core::Result<Issue> {
        let key = self.key;
        let fields = self.fields;

        let status = match fields.as_ref().and_then(|f| f.status.as_ref()) {
            Some(status) if status.name == "Closed" => IssueStatus::Closed,
            _ => IssueStatus::Any,
        };

        let created = fields.as_ref().and_then(|f| f.created.as_deref());
        let created_date = match created {
            Some(value) => parse_timestamp(value)?,
            None => {
                tracing::warn!(issue = %key, "Issue has no creation date, using epoch");
                DateTime::<Utc>::UNIX_EPOCH
            }
        };

        let (sprint, resolution, closed_sprints) = match fields {
            Some(fields) => (fields.sprint, fields.resolutiondate, fields.closed_sprints),
            None => (None, None, None),
        };

        Ok(Issue {
            id: self.id.into_string(),
            status,
            created_date,
            resolution_date: parse_optional(resolution.as_deref())?,
            sprint: sprint.map(SprintDto::into_sprint).transpose()?,
            closed_sprints: closed_sprints
                .unwrap_or_default()
                .into_iter()
                .map(SprintDto::into_sprint)
                .collect::<epicast_core::Result<Vec<_>>>()?,
            key,
        })
    }
}

fn parse_optional(value: Option<&str>) -> epicast_core::Result<Option<DateTime<Utc>>> {
    value.map(parse_timestamp).transpose()
}
