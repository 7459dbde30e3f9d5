// Rust guideline compliant 2026-10-14

//! Error handling for Epicast application services.

use epicast_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No snapshot exists for the requested epic.
    NotFound,
    /// A snapshot exists but cannot be mapped to domain values.
    InvalidSnapshot,
    /// A sprint window or growth factor value is unknown.
    InvalidSetting,
    /// Configuration failed to load or validate.
    InvalidConfig,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading snapshots or config.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// No snapshot file for the epic.
    #[error("No snapshot for epic {key} at {path}")]
    SnapshotNotFound {
        /// Epic key that was requested.
        key: String,
        /// Path where the snapshot was expected.
        path: PathBuf,
    },

    /// Snapshot content is malformed.
    #[error("Invalid snapshot for epic {key}: {reason}")]
    InvalidSnapshot {
        /// Epic key whose snapshot failed.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::SnapshotNotFound { .. } => ErrorCode::NotFound,
            AppError::InvalidSnapshot { .. } => ErrorCode::InvalidSnapshot,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::InvalidSetting(_) => ErrorCode::InvalidSetting,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::InvalidDate(_) => ErrorCode::InvalidSnapshot,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::SnapshotNotFound { key, path } => Some(serde_json::json!({
                "epic": key,
                "path": path,
            })),
            AppError::InvalidSnapshot { key, .. } => Some(serde_json::json!({
                "epic": key,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_for_core_errors() {
        let err = AppError::from(CoreError::InvalidSetting("x".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidSetting);
        let err = AppError::from(CoreError::InvalidDate("x".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidSnapshot);
    }

    #[test]
    fn test_not_found_details_name_the_epic() {
        let err = AppError::SnapshotNotFound {
            key: "PRJ-1".to_string(),
            path: PathBuf::from("snapshots/PRJ-1.json"),
        };
        assert_eq!(err.code(), ErrorCode::NotFound);
        let details = err.details().unwrap();
        assert_eq!(details["epic"], "PRJ-1");
    }
}
