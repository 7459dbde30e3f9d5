// Rust guideline compliant 2026-10-12

//! Epicast Core Library
//!
//! This crate provides the report engine for Epicast:
//! - Data models (Issue, Sprint, Epic and their state predicates)
//! - Sprint report builder (per-sprint delivery metrics)
//! - Velocity calculator (trailing-window averages over closed sprints)
//! - Burndown projector (simulated future sprints until the backlog closes)
//! - Epic report assembler
//! - Report settings, configuration and error types

pub mod burndown;
pub mod config;
pub mod epic_report;
pub mod error;
pub mod models;
pub mod settings;
pub mod sprint_report;
pub mod velocity;

pub use burndown::project_burndown;
pub use config::{Config, OutputFormat};
pub use epic_report::{prepare_epic_report, prepare_issues_report, EpicReport, IssuesReport};
pub use error::{Error, Result};
pub use models::{Epic, Issue, IssueStatus, Sprint, SprintId, SprintState};
pub use settings::{GrowthFactor, SprintWindow};
pub use sprint_report::{prepare_sprint_reports, SprintReport};
pub use velocity::{prepare_velocity_report, Velocity, VelocityReport};
