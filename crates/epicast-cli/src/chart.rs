// Rust guideline compliant 2026-10-16

//! Text burnup chart.
//!
//! One row per sprint. `#` marks issues closed in historical sprints, `=`
//! marks projected closure and `.` the remaining open backlog. Bars share one
//! scale so that backlog growth is visible.

use epicast_core::EpicReport;

const MIN_BAR_WIDTH: usize = 10;

/// Renders the burnup chart for a report within `width` columns.
pub fn render_burnup_chart(report: &EpicReport, width: usize) -> String {
    let rows = &report.burndown_reports;
    if rows.is_empty() {
        return "No sprints to chart.".to_string();
    }

    let historical = report.sprint_reports.len();
    let label_width = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_label(index, historical, &row.sprint_name).chars().count())
        .max()
        .unwrap_or(0);
    let max_total = rows.iter().map(|row| row.total_issues).max().unwrap_or(0).max(1);
    let count_width = max_total.to_string().len() * 2 + 1;
    let bar_width = width
        .saturating_sub(label_width + count_width + 4)
        .max(MIN_BAR_WIDTH);

    let mut output = String::new();
    for (index, row) in rows.iter().enumerate() {
        let closed = scale(row.total_closed_issues, max_total, bar_width).min(bar_width);
        let total = scale(row.total_issues, max_total, bar_width).clamp(closed, bar_width);
        let fill = if index < historical { '#' } else { '=' };

        let mut bar = String::with_capacity(bar_width);
        bar.extend(std::iter::repeat(fill).take(closed));
        bar.extend(std::iter::repeat('.').take(total - closed));
        bar.extend(std::iter::repeat(' ').take(bar_width - total));

        output.push_str(&format!(
            "{:>label_width$} |{}| {}/{}\n",
            row_label(index, historical, &row.sprint_name),
            bar,
            row.total_closed_issues,
            row.total_issues,
        ));
    }
    output
}

fn row_label(index: usize, historical: usize, name: &str) -> String {
    if index < historical {
        name.to_string()
    } else {
        format!("+{}", name)
    }
}

fn scale(value: usize, max: usize, width: usize) -> usize {
    ((value as f64 / max as f64) * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use epicast_core::{prepare_epic_report, GrowthFactor, SprintWindow};

    #[test]
    fn test_empty_report_has_no_chart() {
        let report = prepare_epic_report(&[], SprintWindow::All, GrowthFactor::Zero);
        assert_eq!(render_burnup_chart(&report, 80), "No sprints to chart.");
    }

    #[test]
    fn test_scale_is_proportional() {
        assert_eq!(scale(5, 10, 40), 20);
        assert_eq!(scale(10, 10, 40), 40);
        assert_eq!(scale(0, 10, 40), 0);
    }
}
