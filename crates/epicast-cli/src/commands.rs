// Rust guideline compliant 2026-10-16

//! Command implementations for the Epicast CLI.

pub mod config;
pub mod epics;
pub mod options;
pub mod report;
