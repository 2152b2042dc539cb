use std::path::Path;

use serde::Serialize;

use crate::{
    catalog::CatalogMeta, generator::Generator, picker_error::PickerError,
    preferences::Preferences, search_config::SearchConfig, weight_result::WeightResult,
};

/// Precomputed lookup table: the catalog plus every total it can reach.
#[derive(Debug, Serialize)]
pub struct CombosPayload {
    pub meta: CatalogMeta,
    pub totals: Vec<WeightResult>,
}

impl CombosPayload {
    #[must_use]
    pub fn build(generator: &Generator, config: &SearchConfig, prefs: &Preferences) -> Self {
        CombosPayload {
            meta: generator.catalog().meta(),
            totals: generator.generate(config, prefs),
        }
    }

    ///
    /// # Errors
    /// If serialization fails.
    ///
    pub fn to_json(&self, pretty: bool) -> Result<String, PickerError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    ///
    /// # Errors
    /// If serialization fails or the file cannot be written.
    ///
    pub fn write(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), PickerError> {
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }
}
