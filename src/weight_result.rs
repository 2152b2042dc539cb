use serde::Serialize;

/// The ranked side loads for one achievable total.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightResult {
    #[serde(rename = "kg")]
    weight: f64,
    #[serde(skip)]
    min_plates: usize,
    combos: Vec<Vec<usize>>,
}

impl WeightResult {
    #[must_use]
    pub fn new(weight: f64, min_plates: usize, combos: Vec<Vec<usize>>) -> Self {
        WeightResult {
            weight,
            min_plates,
            combos,
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Plate count of the best-ranked combo.
    #[must_use]
    pub fn min_plates(&self) -> usize {
        self.min_plates
    }

    #[must_use]
    pub fn combos(&self) -> &[Vec<usize>] {
        &self.combos
    }

    #[must_use]
    pub fn combo_count(&self) -> usize {
        self.combos.len()
    }

    /// Catalog indices of the combo at `position`, empty when out of range.
    #[must_use]
    pub fn combo_indices(&self, position: usize) -> Vec<usize> {
        self.combos.get(position).cloned().unwrap_or_default()
    }
}

impl IntoIterator for WeightResult {
    type Item = Vec<usize>;
    type IntoIter = std::vec::IntoIter<Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.combos.into_iter()
    }
}
