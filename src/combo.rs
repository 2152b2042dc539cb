use std::{cmp::Ordering, fmt::Display};

use itertools::Itertools;

use crate::{catalog::PlateCatalog, ranking::RankingKeys};

/// One accepted side load.
///
/// `indices` lists catalog positions heaviest-first with one entry per plate,
/// so `[0, 0, 3]` is two of plate 0 and one of plate 3.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combo {
    indices: Vec<usize>,
    micro: usize,
    heavy: Vec<i64>,
}

impl Combo {
    pub(crate) fn from_counts(counts: &[usize], order: &[usize], keys: &RankingKeys) -> Self {
        let indices = order
            .iter()
            .flat_map(|&i| std::iter::repeat_n(i, counts[i]))
            .collect();

        Combo {
            indices,
            micro: keys.micro_count(counts),
            heavy: keys.heavy_vector(counts),
        }
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    #[must_use]
    pub fn micro(&self) -> usize {
        self.micro
    }

    #[must_use]
    pub fn plates(&self) -> usize {
        self.indices.len()
    }

    /// Heavy-preference vector first, then the index sequence, then length.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.heavy
            .iter()
            .zip(&other.heavy)
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.indices
                    .iter()
                    .zip(&other.indices)
                    .map(|(a, b)| a.cmp(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.indices.len().cmp(&other.indices.len()))
    }
}

/// A combo paired with its catalog for printing labels.
pub struct ComboLabels<'a> {
    pub indices: &'a [usize],
    pub catalog: &'a PlateCatalog,
}

impl Display for ComboLabels<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.catalog.labels(self.indices).iter().join(", "))
    }
}
