// Rust guideline compliant 2026-10-16

//! Output formatting module for the Epicast CLI.
//!
//! This module provides functionality for formatting reports, epics and
//! settings in various output formats (JSON, table, plain text).

use crate::chart::render_burnup_chart;
use epicast_app::{ErrorEnvelope, LoadedReport, MenuItem, SuccessEnvelope};
use epicast_core::{Config, Epic, GrowthFactor, SprintReport, SprintWindow};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting Epicast data in different output formats.
pub trait OutputFormatter {
    /// Formats a computed report.
    fn format_report(&self, loaded: &LoadedReport) -> String;

    /// Formats the epics available in a snapshot directory.
    fn format_epics(&self, epics: &[Epic]) -> String;

    /// Formats the selectable settings, marking the configured ones.
    fn format_options(
        &self,
        windows: &[MenuItem<SprintWindow>],
        growth_factors: &[MenuItem<GrowthFactor>],
        config: &Config,
    ) -> String;

    /// Formats the effective configuration.
    fn format_config(&self, config: &Config) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &ErrorEnvelope) -> String;
}

/// JSON output formatter.
///
/// Wraps every payload in a success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(payload: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(payload))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, loaded: &LoadedReport) -> String {
        Self::envelope(loaded)
    }

    fn format_epics(&self, epics: &[Epic]) -> String {
        Self::envelope(json!({
            "epics": epics,
            "total": epics.len(),
        }))
    }

    fn format_options(
        &self,
        windows: &[MenuItem<SprintWindow>],
        growth_factors: &[MenuItem<GrowthFactor>],
        config: &Config,
    ) -> String {
        Self::envelope(json!({
            "sprint_windows": windows,
            "growth_factors": growth_factors,
            "selected": {
                "sprint_window": config.sprint_window,
                "growth_factor": config.growth_factor,
            },
        }))
    }

    fn format_config(&self, config: &Config) -> String {
        Self::envelope(config)
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        serde_json::to_string_pretty(&json!({ "status": "error", "error": error }))
            .unwrap_or_else(|_| json!({ "error": error.message }).to_string())
    }
}

/// Table output formatter.
///
/// Formats reports as human-readable tables followed by a burnup chart.
pub struct TableFormatter {
    use_color: bool,
    width: usize,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `width` - Terminal width used to size the chart
    pub fn new(use_color: bool, width: usize) -> Self {
        Self { use_color, width }
    }

    fn sprint_table(reports: &[SprintReport], projected_from: usize) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![
            "Sprint",
            "Committed",
            "Completed",
            "Created",
            "Total",
            "Closed",
            "State",
        ]);

        for (index, report) in reports.iter().enumerate() {
            let state = if index >= projected_from {
                "projected"
            } else if report.is_closed {
                "closed"
            } else {
                "active"
            };
            builder.push_record(vec![
                report.sprint_name.clone(),
                report.committed_issues.to_string(),
                report.completed_issues.to_string(),
                report.created_issues.to_string(),
                report.total_issues.to_string(),
                report.total_closed_issues.to_string(),
                state.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_report(&self, loaded: &LoadedReport) -> String {
        let report = &loaded.report;
        let mut output = String::new();

        let epics: Vec<&str> = loaded.epics.iter().map(|epic| epic.key.as_str()).collect();
        output.push_str(&format!("Epics:       {}\n", epics.join(", ")));
        output.push_str(&format!(
            "Issues:      {} total, {} closed, {} open\n",
            report.issues_report.total_count,
            report.issues_report.closed_count,
            report.issues_report.open_count
        ));
        output.push_str(&format!(
            "Velocity:    {} completed / {} created per sprint ({} closed sprints)\n",
            report.velocity_report.burndown,
            report.velocity_report.backlog,
            report.velocity_report.sprints_counted
        ));
        output.push_str(&format!("Window:      {}\n", report.sprint_window.label()));
        output.push_str(&format!("Growth:      {}\n", report.growth_factor.label()));

        let projected = report.projected_reports().len();
        if report.issues_report.open_count == 0 {
            output.push_str("Forecast:    backlog closed\n");
        } else if report.velocity_report.is_unavailable() {
            output.push_str("Forecast:    no closed sprints yet, nothing to project\n");
        } else if report.velocity_report.burndown.positive().is_none() {
            output.push_str("Forecast:    no completed work in window, nothing to project\n");
        } else {
            output.push_str(&format!("Forecast:    {} more sprints\n", projected));
        }

        if report.burndown_reports.is_empty() {
            output.push_str("\nNo sprints found.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&Self::sprint_table(
            &report.burndown_reports,
            report.sprint_reports.len(),
        ));
        output.push_str("\n\n");
        output.push_str(&render_burnup_chart(report, self.width));
        output
    }

    fn format_epics(&self, epics: &[Epic]) -> String {
        if epics.is_empty() {
            return "No epic snapshots found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Key", "Name", "Done", "Summary"]);
        for epic in epics {
            builder.push_record(vec![
                epic.key.clone(),
                epic.name.clone(),
                if epic.done { "yes" } else { "no" }.to_string(),
                epic.summary.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_options(
        &self,
        windows: &[MenuItem<SprintWindow>],
        growth_factors: &[MenuItem<GrowthFactor>],
        config: &Config,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Setting", "Value", "Description", ""]);
        for item in windows {
            builder.push_record(vec![
                "window".to_string(),
                item.value.to_string(),
                item.name.to_string(),
                selected_marker(item.is_selected(config.sprint_window)),
            ]);
        }
        for item in growth_factors {
            builder.push_record(vec![
                "growth-factor".to_string(),
                item.value.to_string(),
                item.name.to_string(),
                selected_marker(item.is_selected(config.growth_factor)),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_config(&self, config: &Config) -> String {
        let mut output = String::new();
        output.push_str(&format!("sprint_window: {}\n", config.sprint_window));
        output.push_str(&format!("growth_factor: {}\n", config.growth_factor));
        output.push_str(&format!("output_format: {:?}\n", config.output_format));
        output.push_str(&format!("snapshot_dir:  {}\n", config.snapshot_dir.display()));
        output.push_str(&format!("log_level:     {}\n", config.log_level));
        output
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        if !self.use_color {
            return format!("Error: {}", error.message);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error.message);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

fn selected_marker(selected: bool) -> String {
    if selected { "*" } else { "" }.to_string()
}

/// Plain text output formatter.
///
/// Formats data as whitespace-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, loaded: &LoadedReport) -> String {
        let report = &loaded.report;
        let mut output = String::new();
        output.push_str(&format!(
            "issues {} {} {}\n",
            report.issues_report.total_count,
            report.issues_report.closed_count,
            report.issues_report.open_count
        ));
        output.push_str(&format!(
            "velocity {} {}\n",
            report.velocity_report.burndown, report.velocity_report.backlog
        ));

        let historical = report.sprint_reports.len();
        for (index, sprint) in report.burndown_reports.iter().enumerate() {
            output.push_str(&format!(
                "{} {} {} {} {} {} {} {}\n",
                if index < historical { "sprint" } else { "projected" },
                sprint.sprint_name,
                sprint.committed_issues,
                sprint.completed_issues,
                sprint.created_issues,
                sprint.total_issues,
                sprint.total_closed_issues,
                sprint.is_closed
            ));
        }
        output
    }

    fn format_epics(&self, epics: &[Epic]) -> String {
        let mut output = String::new();
        for epic in epics {
            output.push_str(&format!("{} {}\n", epic.key, epic.name));
        }
        output
    }

    fn format_options(
        &self,
        windows: &[MenuItem<SprintWindow>],
        growth_factors: &[MenuItem<GrowthFactor>],
        config: &Config,
    ) -> String {
        let mut output = String::new();
        for item in windows {
            output.push_str(&format!(
                "window {}{}\n",
                item.value,
                if item.is_selected(config.sprint_window) { " *" } else { "" }
            ));
        }
        for item in growth_factors {
            output.push_str(&format!(
                "growth-factor {}{}\n",
                item.value,
                if item.is_selected(config.growth_factor) { " *" } else { "" }
            ));
        }
        output
    }

    fn format_config(&self, config: &Config) -> String {
        format!(
            "{} {} {:?} {} {}\n",
            config.sprint_window,
            config.growth_factor,
            config.output_format,
            config.snapshot_dir.display(),
            config.log_level
        )
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        format!("Error: {}", error.message)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
/// * `width` - Terminal width for table layouts
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool, width: usize) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color, width)),
    }
}
