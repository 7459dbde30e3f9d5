// Rust guideline compliant 2026-10-14

//! Application services for Epicast.
//!
//! This crate sits between the report engine and the front ends: it maps
//! Jira snapshots to domain values, loads epics through an `EpicSource`,
//! assembles reports for several epics at once, keeps report session state
//! and provides menu descriptors and response envelopes.

pub mod error;
pub mod interactor;
pub mod jira;
pub mod menu;
pub mod response;
pub mod session;
pub mod source;

pub use error::{AppError, ErrorCode, Result};
pub use interactor::{EpicReportInteractor, EpicReportRequest, LoadedReport};
pub use menu::{growth_factor_menu, sprint_window_menu, MenuItem};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::{Command, ReportSession, SessionState};
pub use source::{EpicSource, SnapshotDir};
