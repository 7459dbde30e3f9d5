// Rust guideline compliant 2026-10-14

//! Menu descriptors for the report settings selectors.

use epicast_core::{GrowthFactor, SprintWindow};
use serde::Serialize;

/// A selectable option with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem<T> {
    /// Display name.
    pub name: &'static str,
    /// Value selected by this item.
    pub value: T,
}

impl<T: Copy + PartialEq> MenuItem<T> {
    /// Returns true if this item selects `current`.
    pub fn is_selected(&self, current: T) -> bool {
        self.value == current
    }
}

/// Options for the velocity window selector.
pub fn sprint_window_menu() -> Vec<MenuItem<SprintWindow>> {
    SprintWindow::ALL
        .into_iter()
        .map(|value| MenuItem {
            name: value.label(),
            value,
        })
        .collect()
}

/// Options for the backlog growth selector.
pub fn growth_factor_menu() -> Vec<MenuItem<GrowthFactor>> {
    GrowthFactor::ALL
        .into_iter()
        .map(|value| MenuItem {
            name: value.label(),
            value,
        })
        .collect()
}
