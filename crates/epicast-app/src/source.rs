// Rust guideline compliant 2026-10-14

//! Epic issue sources.

use crate::error::{AppError, Result};
use crate::jira::{EpicDto, EpicIssuesResponse};
use epicast_core::{Epic, Issue};
use std::path::{Path, PathBuf};

/// Provides epics and their issues to the report interactor.
///
/// Implementations must be shareable across threads; the interactor loads
/// several epics in parallel.
pub trait EpicSource: Send + Sync {
    /// Loads epic metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the epic cannot be loaded.
    fn epic(&self, key: &str) -> Result<Epic>;

    /// Loads every issue of the epic.
    ///
    /// # Errors
    ///
    /// Returns an error if the epic cannot be loaded or mapped.
    fn epic_issues(&self, key: &str) -> Result<Vec<Issue>>;

    /// Loads epic metadata and issues together.
    ///
    /// Sources backed by one document should override this so the two halves
    /// come from a single read.
    ///
    /// # Errors
    ///
    /// Returns an error if either half cannot be loaded.
    fn load(&self, key: &str) -> Result<(Epic, Vec<Issue>)> {
        Ok((self.epic(key)?, self.epic_issues(key)?))
    }
}

/// Reads epic snapshots from `<root>/<KEY>.json` files.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
}

impl SnapshotDir {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the snapshot path for an epic key.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the key is empty or contains path
    /// separators.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let key = key.trim();
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::InvalidInput(format!(
                "Invalid epic key: '{}'",
                key
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Lists the epic keys that have a snapshot, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<EpicIssuesResponse> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(AppError::SnapshotNotFound {
                key: key.to_string(),
                path,
            });
        }
        let content = std::fs::read_to_string(&path)?;
        EpicIssuesResponse::from_json(&content).map_err(|err| AppError::InvalidSnapshot {
            key: key.to_string(),
            reason: err.to_string(),
        })
    }
}

impl EpicSource for SnapshotDir {
    fn epic(&self, key: &str) -> Result<Epic> {
        let response = self.read(key)?;
        Ok(epic_or_key(response.epic, key))
    }

    fn epic_issues(&self, key: &str) -> Result<Vec<Issue>> {
        let response = self.read(key)?;
        map_issues(response, key)
    }

    fn load(&self, key: &str) -> Result<(Epic, Vec<Issue>)> {
        let mut response = self.read(key)?;
        let epic = epic_or_key(response.epic.take(), key);
        let issues = map_issues(response, key)?;
        Ok((epic, issues))
    }
}

fn epic_or_key(dto: Option<EpicDto>, key: &str) -> Epic {
    dto.map(EpicDto::into_epic)
        .unwrap_or_else(|| Epic::from_key(key))
}

fn map_issues(response: EpicIssuesResponse, key: &str) -> Result<Vec<Issue>> {
    let issues = response
        .into_issues()
        .map_err(|err| AppError::InvalidSnapshot {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
    tracing::info!(epic = key, issues = issues.len(), "Loaded epic snapshot");
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_path_like_keys() {
        let source = SnapshotDir::new("snapshots");
        assert!(source.path_for("../etc/passwd").is_err());
        assert!(source.path_for("").is_err());
        assert_eq!(
            source.path_for("PRJ-1").unwrap(),
            PathBuf::from("snapshots/PRJ-1.json")
        );
    }

    #[test]
    fn test_missing_snapshot_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = SnapshotDir::new(temp_dir.path());
        let err = source.epic_issues("PRJ-404").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn test_epic_falls_back_to_key() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("PRJ-2.json"), r#"{"issues": []}"#).unwrap();
        let source = SnapshotDir::new(temp_dir.path());
        assert_eq!(source.epic("PRJ-2").unwrap(), Epic::from_key("PRJ-2"));
    }

    #[test]
    fn test_list_keys_only_json() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("PRJ-2.json"), "{}").unwrap();
        std::fs::write(temp_dir.path().join("PRJ-1.json"), "{}").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        let source = SnapshotDir::new(temp_dir.path());
        assert_eq!(source.list_keys().unwrap(), vec!["PRJ-1", "PRJ-2"]);
    }

    #[test]
    fn test_malformed_json_is_invalid_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("PRJ-3.json"), "{not json").unwrap();
        let source = SnapshotDir::new(temp_dir.path());
        let err = source.epic_issues("PRJ-3").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidSnapshot);
    }

    #[test]
    fn test_load_returns_epic_and_issues_from_one_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("PRJ-4.json"),
            r#"{
                "epic": {"id": 4, "key": "PRJ-4", "name": "Search", "summary": "", "done": false},
                "issues": [{"id": "7", "key": "PRJ-7", "fields": {
                    "status": {"name": "To Do"},
                    "created": "2024-01-02T10:00:00.000+0000"
                }}]
            }"#,
        )
        .unwrap();
        let source = SnapshotDir::new(temp_dir.path());

        let (epic, issues) = source.load("PRJ-4").unwrap();
        assert_eq!(epic.name, "Search");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "PRJ-7");
    }

    #[test]
    fn test_load_reports_malformed_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("PRJ-3.json"), "{\"issues\": 5}").unwrap();
        let source = SnapshotDir::new(temp_dir.path());
        let err = source.load("PRJ-3").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidSnapshot);
    }
}
