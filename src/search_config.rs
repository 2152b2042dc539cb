use crate::{catalog::PlateCatalog, family::Family, preferences::Preferences};

/// Absolute tolerance for feasibility arithmetic.
pub const EPS: f64 = 1e-6;

/// Inputs to one search invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub bar_kg: f64,
    pub min_total: f64,
    pub max_total: f64,
    /// Extra room above `max_total` so heavier equivalents can be seen by the dominance check.
    pub margin: f64,
    pub family: Option<Family>,
    /// Overrides [`Preferences::max_plates_per_side`] when set.
    pub max_plates_per_side: Option<usize>,
    pub cap_per_weight: usize,
}

impl SearchConfig {
    #[must_use]
    pub fn new(bar_kg: f64, min_total: f64, max_total: f64) -> Self {
        SearchConfig {
            bar_kg,
            min_total,
            max_total,
            margin: 0.0,
            family: None,
            max_plates_per_side: None,
            cap_per_weight: 1,
        }
    }

    /// Searches everything the catalog allows on its own bar.
    #[must_use]
    pub fn full_range(catalog: &PlateCatalog) -> Self {
        let (min, max) = catalog.allowed_range();
        SearchConfig::new(catalog.bar_kg(), min, max)
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_family(mut self, family: Option<Family>) -> Self {
        self.family = family;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap_per_weight: usize) -> Self {
        self.cap_per_weight = cap_per_weight;
        self
    }

    #[must_use]
    pub fn with_max_plates(mut self, max_plates_per_side: usize) -> Self {
        self.max_plates_per_side = Some(max_plates_per_side);
        self
    }

    pub fn set_margin(&mut self, margin: f64) {
        self.margin = margin;
    }

    pub fn set_cap(&mut self, cap_per_weight: u32) {
        self.cap_per_weight = cap_per_weight as usize;
    }

    pub fn set_family(&mut self, family: Family) {
        self.family = Some(family);
    }

    pub fn clear_family(&mut self) {
        self.family = None;
    }

    /// Normalizes the window against the catalog's allowed range.
    ///
    /// Returns `None` when nothing can be found: the window is empty after
    /// clamping or the margin is not a finite number.
    #[must_use]
    pub fn bounds(&self, catalog: &PlateCatalog, prefs: &Preferences) -> Option<SearchBounds> {
        if !self.margin.is_finite() {
            return None;
        }

        let (allowed_min, allowed_max) = catalog.allowed_range();
        let mut min_total = if self.min_total.is_finite() {
            self.min_total
        } else {
            allowed_min
        };
        let mut max_total = if self.max_total.is_finite() {
            self.max_total
        } else {
            allowed_max
        };
        if min_total > max_total {
            std::mem::swap(&mut min_total, &mut max_total);
        }

        let min_total = min_total.max(allowed_min);
        let max_total = max_total.min(allowed_max);
        if min_total > max_total + EPS {
            return None;
        }

        let search_max = (max_total + self.margin.max(0.0)).min(allowed_max);
        let side_max = ((search_max - self.bar_kg) / 2.0).max(0.0);

        Some(SearchBounds {
            bar_kg: self.bar_kg,
            min_total,
            max_total,
            side_max,
            family: self.family,
            max_plates_per_side: self
                .max_plates_per_side
                .unwrap_or(prefs.max_plates_per_side),
            keep: self.cap_per_weight.max(1).min(prefs.combos_per_total()),
        })
    }
}

/// A [`SearchConfig`] after normalization, ready to drive the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchBounds {
    pub bar_kg: f64,
    pub min_total: f64,
    pub max_total: f64,
    pub side_max: f64,
    pub family: Option<Family>,
    pub max_plates_per_side: usize,
    pub keep: usize,
}

impl SearchBounds {
    #[must_use]
    pub fn admits(&self, total_kg: f64) -> bool {
        total_kg >= self.min_total - EPS && total_kg <= self.max_total + EPS
    }
}
