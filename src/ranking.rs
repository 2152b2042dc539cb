use itertools::Itertools;

use crate::{catalog::PlateCatalog, combo::Combo, preferences::Preferences};

/// Preference labels resolved to catalog positions. Unknown labels are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankingKeys {
    heavy: Vec<usize>,
    micro: Vec<usize>,
}

impl RankingKeys {
    #[must_use]
    pub fn new(heavy: Vec<usize>, micro: Vec<usize>) -> Self {
        RankingKeys { heavy, micro }
    }

    #[must_use]
    pub fn resolve(catalog: &PlateCatalog, prefs: &Preferences) -> Self {
        let lookup = |labels: &[String]| {
            labels
                .iter()
                .filter_map(|label| catalog.index_of(label))
                .collect::<Vec<_>>()
        };

        RankingKeys {
            heavy: lookup(&prefs.heavy_pref_order),
            micro: lookup(&prefs.micro_labels),
        }
    }

    #[must_use]
    pub fn micro_count(&self, counts: &[usize]) -> usize {
        self.micro
            .iter()
            .map(|&i| counts.get(i).copied().unwrap_or(0))
            .sum()
    }

    #[must_use]
    pub fn heavy_vector(&self, counts: &[usize]) -> Vec<i64> {
        self.heavy
            .iter()
            .map(|&i| -i64::try_from(counts.get(i).copied().unwrap_or(0)).unwrap_or(i64::MAX))
            .collect()
    }
}

/// Keeps the fewest micro plates, then the fewest plates, ranks what is left
/// and returns at most `keep` combos.
#[must_use]
pub fn select(combos: Vec<Combo>, keep: usize) -> Vec<Combo> {
    let Some(min_micro) = combos.iter().map(Combo::micro).min() else {
        return Vec::new();
    };
    let fewest_micro = combos
        .into_iter()
        .filter(|combo| combo.micro() == min_micro)
        .collect::<Vec<_>>();

    let Some(min_plates) = fewest_micro.iter().map(Combo::plates).min() else {
        return Vec::new();
    };

    fewest_micro
        .into_iter()
        .filter(|combo| combo.plates() == min_plates)
        .sorted_by(Combo::rank_cmp)
        .take(keep)
        .collect()
}
