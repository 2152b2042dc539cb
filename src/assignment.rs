use std::collections::HashSet;

use multimap::MultiMap;

use crate::{combo::Combo, weight_key::WeightKey};

/// Mutable working state owned by a single search call.
#[derive(Debug)]
pub(crate) struct Assignment {
    counts: Vec<usize>,
    seen: HashSet<Vec<usize>>,
    buckets: MultiMap<WeightKey, Combo>,
}

impl Assignment {
    #[must_use]
    pub(crate) fn new(plates: usize) -> Self {
        Assignment {
            counts: vec![0; plates],
            seen: HashSet::new(),
            buckets: MultiMap::new(),
        }
    }

    pub(crate) fn set(&mut self, plate: usize, count: usize) {
        self.counts[plate] = count;
    }

    #[must_use]
    pub(crate) fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Records the current counts under `key`, returning false for a repeat signature.
    #[must_use]
    pub(crate) fn accept(&mut self, key: WeightKey, combo: Combo) -> bool {
        if !self.seen.insert(self.counts.clone()) {
            return false;
        }
        self.buckets.insert(key, combo);
        true
    }

    #[must_use]
    pub(crate) fn into_buckets(self) -> MultiMap<WeightKey, Combo> {
        self.buckets
    }
}
