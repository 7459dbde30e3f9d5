// Rust guideline compliant 2026-10-12

//! Report settings: the trailing sprint window and the backlog growth factor.
//!
//! Both are closed sets. Keeping the growth factor closed is what bounds the
//! burndown projection: every allowed value is strictly below one.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trailing window of closed sprints used for velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SprintWindow {
    /// Every closed sprint.
    All,
    /// The last three closed sprints.
    LastThree,
    /// The last six closed sprints.
    #[default]
    LastSix,
}

impl SprintWindow {
    /// All selectable windows, in menu order.
    pub const ALL: [SprintWindow; 3] = [
        SprintWindow::All,
        SprintWindow::LastSix,
        SprintWindow::LastThree,
    ];

    /// Returns the number of sprints in the window, or `None` for all sprints.
    pub fn limit(self) -> Option<usize> {
        match self {
            SprintWindow::All => None,
            SprintWindow::LastThree => Some(3),
            SprintWindow::LastSix => Some(6),
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SprintWindow::All => "All sprints",
            SprintWindow::LastSix => "Last six sprints",
            SprintWindow::LastThree => "Last three sprints",
        }
    }

    /// Stable identifier used in config files and flags.
    pub fn as_str(self) -> &'static str {
        match self {
            SprintWindow::All => "all",
            SprintWindow::LastThree => "last_three",
            SprintWindow::LastSix => "last_six",
        }
    }
}

impl fmt::Display for SprintWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SprintWindow {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(SprintWindow::All),
            "3" | "last_three" => Ok(SprintWindow::LastThree),
            "6" | "last_six" => Ok(SprintWindow::LastSix),
            _ => Err(Error::InvalidSetting(format!(
                "Unknown sprint window '{}' (expected all, 3 or 6)",
                value
            ))),
        }
    }
}

/// Backlog growth per projected sprint, as a fraction of burndown velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthFactor {
    /// The backlog does not grow.
    Zero,
    /// Backlog grows by 20 percent of velocity.
    #[default]
    OneFifth,
    /// Backlog grows by a third of velocity.
    OneThird,
    /// Backlog grows by half of velocity.
    Half,
}

impl GrowthFactor {
    /// All selectable factors, in menu order.
    pub const ALL: [GrowthFactor; 4] = [
        GrowthFactor::Zero,
        GrowthFactor::OneFifth,
        GrowthFactor::OneThird,
        GrowthFactor::Half,
    ];

    /// Returns the numeric factor. Always in `[0, 1)`.
    pub fn value(self) -> f64 {
        match self {
            GrowthFactor::Zero => 0.0,
            GrowthFactor::OneFifth => 1.0 / 5.0,
            GrowthFactor::OneThird => 1.0 / 3.0,
            GrowthFactor::Half => 1.0 / 2.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            GrowthFactor::Zero => "No backlog growth",
            GrowthFactor::OneFifth => "20 percent of velocity",
            GrowthFactor::OneThird => "33 percent of velocity",
            GrowthFactor::Half => "50 percent of velocity",
        }
    }

    /// Stable identifier used in config files and flags.
    pub fn as_str(self) -> &'static str {
        match self {
            GrowthFactor::Zero => "zero",
            GrowthFactor::OneFifth => "one_fifth",
            GrowthFactor::OneThird => "one_third",
            GrowthFactor::Half => "half",
        }
    }
}

impl fmt::Display for GrowthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthFactor {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "0" | "0.0" | "zero" | "none" => Ok(GrowthFactor::Zero),
            "0.2" | "1/5" | "20%" | "one_fifth" => Ok(GrowthFactor::OneFifth),
            "0.33" | "1/3" | "33%" | "one_third" => Ok(GrowthFactor::OneThird),
            "0.5" | "1/2" | "50%" | "half" => Ok(GrowthFactor::Half),
            _ => Err(Error::InvalidSetting(format!(
                "Unknown growth factor '{}' (expected 0, 1/5, 1/3 or 1/2)",
                value
            ))),
        }
    }
}
