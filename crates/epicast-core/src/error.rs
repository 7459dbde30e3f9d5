// Rust guideline compliant 2026-10-12

//! Error types for the Epicast core library.

use thiserror::Error;

/// Result type alias for Epicast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Epicast operations.
///
/// Report computation itself is infallible; these errors come from parsing
/// settings, loading configuration and decoding upstream dates.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown sprint window or growth factor value.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Date string could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
