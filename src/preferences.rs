use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::picker_error::PickerError;

pub const DEFAULT_MAX_PLATES_PER_SIDE: usize = 12;
pub const DEFAULT_MAX_COMBOS_PER_TOTAL: usize = 10;

/// Ranking preferences shared by every search against a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub max_plates_per_side: usize,
    pub max_combos_per_total: usize,
    /// Labels, most preferred first. Using more of an earlier label ranks higher.
    pub heavy_pref_order: Vec<String>,
    /// Fine-adjustment plates, penalized before anything else.
    pub micro_labels: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            max_plates_per_side: DEFAULT_MAX_PLATES_PER_SIDE,
            max_combos_per_total: DEFAULT_MAX_COMBOS_PER_TOTAL,
            heavy_pref_order: Vec::new(),
            micro_labels: Vec::new(),
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn new(max_plates_per_side: usize, max_combos_per_total: usize) -> Self {
        Preferences {
            max_plates_per_side,
            max_combos_per_total,
            ..Preferences::default()
        }
    }

    /// Profile matching [`crate::catalog::PlateCatalog::standard`].
    #[must_use]
    pub fn standard() -> Self {
        let labels = |labels: &[&str]| labels.iter().map(ToString::to_string).collect();
        Preferences {
            heavy_pref_order: labels(&[
                "45lb", "25kg", "20kg", "35lb", "25lb", "15kg", "10kg", "5kg",
            ]),
            micro_labels: labels(&["1.25kg", "1.14kg", "2.5kg"]),
            ..Preferences::default()
        }
    }

    ///
    /// # Errors
    /// If the file cannot be read or is not a preferences object.
    ///
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn push_heavy_label(&mut self, label: &str) {
        self.heavy_pref_order.push(label.to_string());
    }

    pub fn push_micro_label(&mut self, label: &str) {
        self.micro_labels.push(label.to_string());
    }

    #[must_use]
    pub fn combos_per_total(&self) -> usize {
        self.max_combos_per_total.max(1)
    }
}
