use std::fmt::Display;

/// A total weight rounded to hundredths of a kilogram.
///
/// Buckets are keyed on this so that sums which differ only by floating-point
/// noise land together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightKey(i64);

impl WeightKey {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_kg(kg: f64) -> Self {
        WeightKey((kg * 100.0).round() as i64)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn kg(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Rounds to two decimals the same way bucket keys do.
#[must_use]
pub fn round_hundredths(kg: f64) -> f64 {
    WeightKey::from_kg(kg).kg()
}

impl Display for WeightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.kg())
    }
}
