use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::family::Family;

/// One catalog row as it appears in a catalog file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateSpec {
    pub label: String,
    pub kg: f64,
    pub fam: Family,
    #[serde(default)]
    pub color: String,
}

impl PlateSpec {
    pub fn new(label: impl Into<String>, kg: f64, fam: Family) -> Self {
        PlateSpec {
            label: label.into(),
            kg,
            fam,
            color: String::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A denomination with its per-side limit already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Plate {
    label: String,
    mass: f64,
    family: Family,
    color: String,
    limit: usize,
}

impl Plate {
    pub(crate) fn resolve(spec: PlateSpec, limit: usize) -> Self {
        Plate {
            label: spec.label,
            mass: spec.kg,
            family: spec.fam,
            color: spec.color,
            limit,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn spec(&self) -> PlateSpec {
        PlateSpec {
            label: self.label.clone(),
            kg: self.mass,
            fam: self.family,
            color: self.color.clone(),
        }
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
