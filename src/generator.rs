use std::cmp::Reverse;

use itertools::Itertools;
use tracing::debug;

use crate::{
    catalog::PlateCatalog,
    dominance::MergePatterns,
    preferences::Preferences,
    ranking::{self, RankingKeys},
    search_config::{EPS, SearchConfig},
    side_load::SideLoadSearch,
    weight_result::WeightResult,
};

/// A catalog with everything that can be computed before a target is known.
///
/// Searches borrow the generator immutably, so one instance can serve any
/// number of calls, including from several threads at once.
#[derive(Clone, Debug)]
pub struct Generator {
    catalog: PlateCatalog,
    order: Vec<usize>,
    patterns: MergePatterns,
}

impl Generator {
    #[must_use]
    pub fn new(catalog: PlateCatalog) -> Self {
        let order = Self::heaviest_first(&catalog);
        let patterns = MergePatterns::build(catalog.plates());
        debug!(
            plates = catalog.len(),
            patterns = patterns.len(),
            "prepared plate catalog"
        );

        Generator {
            catalog,
            order,
            patterns,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &PlateCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn patterns(&self) -> &MergePatterns {
        &self.patterns
    }

    /// Catalog positions sorted by mass, heaviest first, ties by position.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Every achievable total in the window with its best side loads,
    /// lightest total first.
    #[must_use]
    pub fn generate(&self, config: &SearchConfig, prefs: &Preferences) -> Vec<WeightResult> {
        if self.catalog.is_empty() {
            return Vec::new();
        }
        let Some(bounds) = config.bounds(&self.catalog, prefs) else {
            debug!(?config, "search window is empty");
            return Vec::new();
        };
        debug!(?bounds, "searching side loads");

        let keys = RankingKeys::resolve(&self.catalog, prefs);
        let buckets =
            SideLoadSearch::new(&self.catalog, &self.order, &self.patterns, &keys, bounds).run();
        debug!(buckets = buckets.len(), "collected weight buckets");

        buckets
            .into_iter()
            .sorted_by_key(|(key, _)| *key)
            .filter_map(|(key, combos)| {
                let kept = ranking::select(combos, bounds.keep);
                let min_plates = kept.first()?.plates();
                Some(WeightResult::new(
                    key.kg(),
                    min_plates,
                    kept.into_iter().map(|combo| combo.into_indices()).collect(),
                ))
            })
            .collect()
    }

    /// Masses are compared in whole multiples of `EPS`, so near-equal plates
    /// tie and keep catalog order.
    #[allow(clippy::cast_possible_truncation)]
    fn heaviest_first(catalog: &PlateCatalog) -> Vec<usize> {
        let plates = catalog.plates();
        (0..plates.len())
            .sorted_by_key(|&i| (Reverse((plates[i].mass() / EPS).round() as i64), i))
            .collect()
    }
}

/// One-shot search for callers that do not keep a [`Generator`] around.
#[must_use]
pub fn generate_combos(
    catalog: &PlateCatalog,
    config: &SearchConfig,
    prefs: &Preferences,
) -> Vec<WeightResult> {
    Generator::new(catalog.clone()).generate(config, prefs)
}
