use hashbrown::HashMap;
use itertools::Itertools;

use crate::plate::Plate;

pub const MIN_PARTS: usize = 2;
pub const MAX_PARTS: usize = 4;

#[allow(clippy::cast_possible_truncation)]
fn mass_key(kg: f64) -> i64 {
    (kg * 1000.0).round() as i64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Part {
    pub index: usize,
    pub count: usize,
}

/// A group of plates whose mass equals a single other plate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MergePattern {
    pub target: usize,
    pub parts: Vec<Part>,
}

impl MergePattern {
    fn applies(&self, counts: &[usize], limits: &[usize]) -> bool {
        let has_headroom = counts.get(self.target).copied().unwrap_or(0)
            < limits.get(self.target).copied().unwrap_or(0);

        has_headroom
            && self
                .parts
                .iter()
                .all(|part| counts.get(part.index).copied().unwrap_or(0) >= part.count)
    }
}

/// Every merge pattern of a catalog. Depends on plate masses only, so one set
/// serves any number of searches.
#[derive(Clone, Debug, Default)]
pub struct MergePatterns {
    patterns: Vec<MergePattern>,
}

impl MergePatterns {
    #[must_use]
    pub fn build(plates: &[Plate]) -> Self {
        let targets_by_mass: HashMap<i64, Vec<usize>> =
            plates.iter().enumerate().fold(HashMap::new(), |mut acc, (i, plate)| {
                acc.entry(mass_key(plate.mass())).or_default().push(i);
                acc
            });

        let patterns = (MIN_PARTS..=MAX_PARTS)
            .flat_map(|r| (0..plates.len()).combinations_with_replacement(r))
            .flat_map(|combo| {
                let mass: f64 = combo.iter().map(|&i| plates[i].mass()).sum();
                let parts = combo
                    .into_iter()
                    .dedup_with_count()
                    .map(|(count, index)| Part { index, count })
                    .collect::<Vec<_>>();

                targets_by_mass
                    .get(&mass_key(mass))
                    .into_iter()
                    .flatten()
                    .copied()
                    .filter(|&target| {
                        !(parts.len() == 1 && parts[0].count == 1 && parts[0].index == target)
                    })
                    .map(|target| MergePattern {
                        target,
                        parts: parts.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        MergePatterns { patterns }
    }

    /// True when some group of plates in `counts` could be swapped for one
    /// plate that still has room under its limit.
    #[must_use]
    pub fn is_dominated(&self, counts: &[usize], limits: &[usize]) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.applies(counts, limits))
    }

    #[must_use]
    pub fn patterns(&self) -> &[MergePattern] {
        &self.patterns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{LimitTable, PlateCatalog},
        family::Family,
        plate::PlateSpec,
    };

    fn catalog(masses: &[(&str, f64)], default_limit: i64) -> PlateCatalog {
        PlateCatalog::new(
            masses
                .iter()
                .map(|(label, kg)| PlateSpec::new(*label, *kg, Family::Kg))
                .collect(),
            &LimitTable {
                default: Some(default_limit),
                ..LimitTable::default()
            },
        )
    }

    #[test]
    fn finds_pairs_and_quads() {
        let catalog = catalog(&[("20", 20.0), ("10", 10.0), ("5", 5.0)], 4);
        let patterns = MergePatterns::build(catalog.plates());

        let expected = [
            MergePattern {
                target: 0,
                parts: vec![Part { index: 1, count: 2 }],
            },
            MergePattern {
                target: 1,
                parts: vec![Part { index: 2, count: 2 }],
            },
            MergePattern {
                target: 0,
                parts: vec![Part { index: 1, count: 1 }, Part { index: 2, count: 2 }],
            },
            MergePattern {
                target: 0,
                parts: vec![Part { index: 2, count: 4 }],
            },
        ];
        for pattern in &expected {
            assert!(patterns.patterns().contains(pattern), "missing {pattern:?}");
        }
        assert_eq!(patterns.len(), expected.len());
    }

    #[test]
    fn dominance_needs_headroom() {
        let catalog = catalog(&[("5", 5.0), ("2.5", 2.5)], 2);
        let patterns = MergePatterns::build(catalog.plates());

        assert!(patterns.is_dominated(&[0, 2], catalog.limits()));
        assert!(patterns.is_dominated(&[1, 2], catalog.limits()));
        assert!(!patterns.is_dominated(&[2, 2], catalog.limits()));
        assert!(!patterns.is_dominated(&[0, 1], catalog.limits()));
    }

    #[test]
    fn matches_within_a_gram() {
        let catalog = catalog(&[("a", 1.0), ("b", 0.4996), ("c", 0.5)], 2);
        let patterns = MergePatterns::build(catalog.plates());
        assert!(patterns.is_dominated(&[0, 1, 1], catalog.limits()));
    }

    #[test]
    fn empty_catalog_has_no_patterns() {
        assert!(MergePatterns::build(&[]).is_empty());
    }
}
