use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    family::Family,
    picker_error::PickerError,
    plate::{Plate, PlateSpec},
};

pub const DEFAULT_LIMIT: usize = 2;
pub const MAX_LIMIT: usize = 64;
pub const DEFAULT_BAR_KG: f64 = 20.0;
pub const LB_TO_KG: f64 = 0.453_592;

/// Per-side limits as written in a catalog file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitTable {
    #[serde(default)]
    pub default: Option<i64>,
    #[serde(default)]
    pub overrides: std::collections::BTreeMap<String, i64>,
}

impl LimitTable {
    fn resolve(&self, label: &str) -> usize {
        let raw = self
            .overrides
            .get(label)
            .copied()
            .or(self.default)
            .unwrap_or(DEFAULT_LIMIT as i64);
        usize::try_from(raw.clamp(0, MAX_LIMIT as i64)).unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowedRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// The `meta` object of a catalog file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogMeta {
    #[serde(default)]
    pub bar_kg: Option<f64>,
    #[serde(default)]
    pub limits: LimitTable,
    #[serde(default)]
    pub range: AllowedRange,
    #[serde(default)]
    pub plates: Vec<PlateSpec>,
}

#[derive(Deserialize)]
struct CatalogFile {
    meta: CatalogMeta,
}

/// Available denominations with their effective per-side limits.
///
/// Plate order is the catalog order; every other part of the crate refers to
/// plates by their position here.
#[derive(Clone, Debug)]
pub struct PlateCatalog {
    plates: Vec<Plate>,
    index_by_label: HashMap<String, usize>,
    limits: Vec<usize>,
    bar_kg: f64,
    allowed_min: f64,
    allowed_max: f64,
    limit_table: LimitTable,
}

impl PlateCatalog {
    #[must_use]
    pub fn new(plates: Vec<PlateSpec>, limits: &LimitTable) -> Self {
        let plates = plates
            .into_iter()
            .map(|spec| {
                let limit = limits.resolve(&spec.label);
                Plate::resolve(spec, limit)
            })
            .collect::<Vec<_>>();

        let index_by_label = plates
            .iter()
            .enumerate()
            .map(|(i, plate)| (plate.label().to_string(), i))
            .collect();

        let limits_resolved = plates.iter().map(Plate::limit).collect();

        PlateCatalog {
            plates,
            index_by_label,
            limits: limits_resolved,
            bar_kg: DEFAULT_BAR_KG,
            allowed_min: f64::NEG_INFINITY,
            allowed_max: f64::INFINITY,
            limit_table: limits.clone(),
        }
    }

    #[must_use]
    pub fn from_meta(meta: CatalogMeta) -> Self {
        let mut catalog = PlateCatalog::new(meta.plates, &meta.limits);
        catalog.bar_kg = meta.bar_kg.unwrap_or(DEFAULT_BAR_KG);
        catalog.allowed_min = meta.range.min.unwrap_or(f64::NEG_INFINITY);
        catalog.allowed_max = meta.range.max.unwrap_or(f64::INFINITY);
        catalog
    }

    ///
    /// # Errors
    /// If the text is not a JSON document with a `meta` catalog object.
    ///
    pub fn from_json_str(json: &str) -> Result<Self, PickerError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_meta(file.meta))
    }

    ///
    /// # Errors
    /// If the file cannot be read or does not hold a catalog.
    ///
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The gym's everyday set: bumper plates in both units plus fractional kg plates.
    #[must_use]
    pub fn standard() -> Self {
        let plates = vec![
            PlateSpec::new("45lb", 45.0 * LB_TO_KG, Family::Lb).with_color("#C62828"),
            PlateSpec::new("35lb", 35.0 * LB_TO_KG, Family::Lb).with_color("#1565C0"),
            PlateSpec::new("25lb", 25.0 * LB_TO_KG, Family::Lb).with_color("#F9A825"),
            PlateSpec::new("15lb", 15.0 * LB_TO_KG, Family::Lb).with_color("#000000"),
            PlateSpec::new("10lb", 10.0 * LB_TO_KG, Family::Lb).with_color("#2E7D32"),
            PlateSpec::new("25kg", 25.0, Family::Kg).with_color("#212121"),
            PlateSpec::new("20kg", 20.0, Family::Kg).with_color("#2E2E2E"),
            PlateSpec::new("15kg", 15.0, Family::Kg).with_color("#424242"),
            PlateSpec::new("10kg", 10.0, Family::Kg).with_color("#616161"),
            PlateSpec::new("5kg", 5.0, Family::Kg).with_color("#757575"),
            PlateSpec::new("2.5kg", 2.5, Family::Kg).with_color("#9E9E9E"),
            PlateSpec::new("1.25kg", 1.25, Family::Kg).with_color("#BDBDBD"),
            PlateSpec::new("1.14kg", 1.14, Family::Kg).with_color("#C7C7C7"),
        ];

        let limits = LimitTable {
            default: Some(DEFAULT_LIMIT as i64),
            overrides: [("45lb", 8), ("25kg", 8), ("20kg", 8), ("1.25kg", 1), ("1.14kg", 1)]
                .into_iter()
                .map(|(label, limit)| (label.to_string(), limit))
                .collect(),
        };

        Self::from_meta(CatalogMeta {
            bar_kg: Some(DEFAULT_BAR_KG),
            limits,
            range: AllowedRange {
                min: Some(40.0),
                max: Some(220.0),
            },
            plates,
        })
    }

    #[must_use]
    pub fn meta(&self) -> CatalogMeta {
        CatalogMeta {
            bar_kg: Some(self.bar_kg),
            limits: self.limit_table.clone(),
            range: AllowedRange {
                min: self.allowed_min.is_finite().then_some(self.allowed_min),
                max: self.allowed_max.is_finite().then_some(self.allowed_max),
            },
            plates: self.plates.iter().map(Plate::spec).collect(),
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn plate(&self, index: usize) -> Option<&Plate> {
        self.plates.get(index)
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index_by_label.get(label).copied()
    }

    #[must_use]
    pub fn limits(&self) -> &[usize] {
        &self.limits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn bar_kg(&self) -> f64 {
        self.bar_kg
    }

    #[must_use]
    pub fn allowed_range(&self) -> (f64, f64) {
        (self.allowed_min, self.allowed_max)
    }

    /// Label at `index`, or an empty string when out of range.
    #[must_use]
    pub fn plate_label(&self, index: usize) -> String {
        self.plate(index)
            .map(|plate| plate.label().to_string())
            .unwrap_or_default()
    }

    /// Labels for a combo's plate indices, skipping anything out of range.
    #[must_use]
    pub fn labels(&self, indices: &[usize]) -> Vec<&str> {
        indices
            .iter()
            .filter_map(|&i| self.plate(i).map(Plate::label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(default: Option<i64>, overrides: &[(&str, i64)]) -> LimitTable {
        LimitTable {
            default,
            overrides: overrides
                .iter()
                .map(|(label, n)| ((*label).to_string(), *n))
                .collect(),
        }
    }

    #[test]
    fn overrides_win_over_default() {
        let catalog = PlateCatalog::new(
            vec![
                PlateSpec::new("20kg", 20.0, Family::Kg),
                PlateSpec::new("10kg", 10.0, Family::Kg),
            ],
            &limits(Some(3), &[("20kg", 5)]),
        );
        assert_eq!(catalog.limits(), &[5, 3]);
        assert_eq!(catalog.index_of("10kg"), Some(1));
        assert_eq!(catalog.index_of("5kg"), None);
    }

    #[test]
    fn limits_are_clamped() {
        let catalog = PlateCatalog::new(
            vec![
                PlateSpec::new("a", 1.0, Family::Kg),
                PlateSpec::new("b", 2.0, Family::Kg),
            ],
            &limits(None, &[("a", -4), ("b", 1_000)]),
        );
        assert_eq!(catalog.limits(), &[0, MAX_LIMIT]);
    }

    #[test]
    fn missing_default_is_two() {
        let catalog = PlateCatalog::new(
            vec![PlateSpec::new("a", 1.0, Family::Kg)],
            &LimitTable::default(),
        );
        assert_eq!(catalog.limits(), &[DEFAULT_LIMIT]);
    }

    #[test]
    fn parses_catalog_file() {
        let json = r##"{
            "meta": {
                "bar_kg": 15,
                "limits": {"default": 2, "overrides": {"25kg": 8}},
                "range": {"min": 40, "max": 220},
                "plates": [
                    {"label": "25kg", "kg": 25.0, "fam": "kg", "color": "#212121"},
                    {"label": "45lb", "kg": 20.41164, "fam": "lb", "color": "#C62828"}
                ]
            },
            "totals": []
        }"##;
        let catalog = PlateCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!((catalog.bar_kg() - 15.0).abs() < f64::EPSILON);
        assert_eq!(catalog.limits(), &[8, 2]);
        assert_eq!(catalog.allowed_range(), (40.0, 220.0));
        assert_eq!(catalog.plate(1).unwrap().family(), Family::Lb);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PlateCatalog::from_json_str("{\"plates\": []}").is_err());
    }

    #[test]
    fn standard_catalog_has_expected_limits() {
        let catalog = PlateCatalog::standard();
        assert_eq!(catalog.len(), 13);
        let limit = |label: &str| catalog.limits()[catalog.index_of(label).unwrap()];
        assert_eq!(limit("45lb"), 8);
        assert_eq!(limit("1.14kg"), 1);
        assert_eq!(limit("10kg"), DEFAULT_LIMIT);
        assert_eq!(catalog.labels(&[5, 5, 99, 12]), vec!["25kg", "25kg", "1.14kg"]);
    }
}
