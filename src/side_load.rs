use multimap::MultiMap;
use tracing::trace;

use crate::{
    assignment::Assignment,
    catalog::PlateCatalog,
    combo::Combo,
    dominance::MergePatterns,
    ranking::RankingKeys,
    search_config::{EPS, SearchBounds},
    weight_key::WeightKey,
};

/// Depth-first enumeration of one side's plate counts.
///
/// One recursion level per catalog plate, visited in `order`. Each level tries
/// every admissible count from the largest down to zero.
pub(crate) struct SideLoadSearch<'a> {
    catalog: &'a PlateCatalog,
    order: &'a [usize],
    patterns: &'a MergePatterns,
    keys: &'a RankingKeys,
    bounds: SearchBounds,
    assignment: Assignment,
}

impl<'a> SideLoadSearch<'a> {
    pub(crate) fn new(
        catalog: &'a PlateCatalog,
        order: &'a [usize],
        patterns: &'a MergePatterns,
        keys: &'a RankingKeys,
        bounds: SearchBounds,
    ) -> Self {
        SideLoadSearch {
            catalog,
            order,
            patterns,
            keys,
            bounds,
            assignment: Assignment::new(catalog.len()),
        }
    }

    pub(crate) fn run(mut self) -> MultiMap<WeightKey, Combo> {
        self.descend(0, 0.0, 0);
        self.assignment.into_buckets()
    }

    fn descend(&mut self, position: usize, side_mass: f64, plates_used: usize) {
        if side_mass > self.bounds.side_max + EPS || plates_used > self.bounds.max_plates_per_side
        {
            return;
        }

        let Some(&index) = self.order.get(position) else {
            self.finish(side_mass);
            return;
        };
        let catalog = self.catalog;
        let plate = &catalog.plates()[index];

        let family_excluded = self
            .bounds
            .family
            .is_some_and(|family| family != plate.family());
        let max_count = if family_excluded {
            0
        } else {
            let slots = self.bounds.max_plates_per_side - plates_used;
            plate.limit().min(slots).min(self.mass_budget(side_mass, plate.mass()))
        };

        for count in (0..=max_count).rev() {
            self.assignment.set(index, count);
            #[allow(clippy::cast_precision_loss)]
            let added = count as f64 * plate.mass();
            self.descend(position + 1, side_mass + added, plates_used + count);
        }
        self.assignment.set(index, 0);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn mass_budget(&self, side_mass: f64, plate_mass: f64) -> usize {
        if plate_mass <= EPS {
            return 0;
        }
        let fits = ((self.bounds.side_max - side_mass + EPS) / plate_mass).floor();
        if fits <= 0.0 { 0 } else { fits as usize }
    }

    fn finish(&mut self, side_mass: f64) {
        let key = WeightKey::from_kg(self.bounds.bar_kg + 2.0 * side_mass);
        if !self.bounds.admits(key.kg()) {
            return;
        }

        let counts = self.assignment.counts();
        if self.patterns.is_dominated(counts, self.catalog.limits()) {
            return;
        }

        let combo = Combo::from_counts(counts, self.order, self.keys);
        if !self.assignment.accept(key, combo) {
            trace!(%key, "repeated signature");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::LimitTable, family::Family, plate::PlateSpec, preferences::Preferences,
        search_config::SearchConfig,
    };

    fn run(catalog: &PlateCatalog, config: &SearchConfig) -> MultiMap<WeightKey, Combo> {
        let order = (0..catalog.len()).collect::<Vec<_>>();
        let patterns = MergePatterns::build(catalog.plates());
        let keys = RankingKeys::default();
        let bounds = config.bounds(catalog, &Preferences::default()).unwrap();
        SideLoadSearch::new(catalog, &order, &patterns, &keys, bounds).run()
    }

    #[test]
    fn exact_fit_survives_float_noise() {
        // 3 x 0.1 is not exactly 0.3 in binary
        let catalog = PlateCatalog::new(
            vec![PlateSpec::new("0.1", 0.1, Family::Kg)],
            &LimitTable {
                default: Some(3),
                ..LimitTable::default()
            },
        );
        let buckets = run(&catalog, &SearchConfig::new(0.0, 0.6, 0.6));
        let combos = buckets.get_vec(&WeightKey::from_kg(0.6)).unwrap();
        assert_eq!(combos[0].indices(), &[0, 0, 0]);
    }

    #[test]
    fn filtered_family_is_skipped() {
        let catalog = PlateCatalog::new(
            vec![
                PlateSpec::new("10kg", 10.0, Family::Kg),
                PlateSpec::new("10lb", 10.0 * 0.453_592, Family::Lb),
            ],
            &LimitTable::default(),
        );
        let config = SearchConfig::new(20.0, 20.0, 100.0).with_family(Some(Family::Lb));
        let buckets = run(&catalog, &config);
        assert!(
            buckets
                .iter_all()
                .flat_map(|(_, combos)| combos)
                .all(|combo| !combo.indices().contains(&0))
        );
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn each_signature_is_bucketed_once() {
        let catalog = PlateCatalog::new(
            vec![
                PlateSpec::new("10", 10.0, Family::Kg),
                PlateSpec::new("5", 5.0, Family::Kg),
                PlateSpec::new("2.5", 2.5, Family::Kg),
            ],
            &LimitTable {
                default: Some(3),
                ..LimitTable::default()
            },
        );
        let buckets = run(&catalog, &SearchConfig::new(20.0, 20.0, 120.0));
        let all = buckets
            .iter_all()
            .flat_map(|(_, combos)| combos)
            .map(Combo::indices)
            .collect::<Vec<_>>();
        let distinct = all.iter().collect::<std::collections::HashSet<_>>();
        assert!(!all.is_empty());
        assert_eq!(all.len(), distinct.len());
    }
}
