use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::weight_result::WeightResult;

const KEY_EPS: f64 = 1e-9;

/// Results whose weight is within `tolerance` of `target`.
#[must_use]
pub fn nearest(results: &[WeightResult], target: f64, tolerance: f64) -> Vec<WeightResult> {
    results
        .iter()
        .filter(|r| (r.weight() - target).abs() <= tolerance + KEY_EPS)
        .cloned()
        .collect()
}

/// Results whose weight lies in `[min, max]`.
#[must_use]
pub fn within(results: &[WeightResult], min: f64, max: f64) -> Vec<WeightResult> {
    results
        .iter()
        .filter(|r| r.weight() >= min - KEY_EPS && r.weight() <= max + KEY_EPS)
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Asc,
    Desc,
    Closest,
    Farthest,
    /// Fewest plates first, then closest to the target.
    Plates,
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Asc => write!(f, "asc"),
            SortMode::Desc => write!(f, "desc"),
            SortMode::Closest => write!(f, "closest"),
            SortMode::Farthest => write!(f, "farthest"),
            SortMode::Plates => write!(f, "plates"),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortMode::Asc),
            "desc" => Ok(SortMode::Desc),
            "closest" => Ok(SortMode::Closest),
            "farthest" => Ok(SortMode::Farthest),
            "plates" => Ok(SortMode::Plates),
            _ => Err("Invalid sort mode.".to_string()),
        }
    }
}

/// Orders results for display. Distance-based modes fall back to ascending
/// weight when there is no target.
#[must_use]
pub fn sort_results(
    results: Vec<WeightResult>,
    mode: SortMode,
    target: Option<f64>,
) -> Vec<WeightResult> {
    let by_weight = |a: &WeightResult, b: &WeightResult| a.weight().total_cmp(&b.weight());

    match (mode, target) {
        (SortMode::Desc, _) => results
            .into_iter()
            .sorted_by(|a, b| by_weight(b, a))
            .collect(),
        (SortMode::Closest, Some(t)) => results
            .into_iter()
            .sorted_by(|a, b| (a.weight() - t).abs().total_cmp(&(b.weight() - t).abs()))
            .collect(),
        (SortMode::Farthest, Some(t)) => results
            .into_iter()
            .sorted_by(|a, b| (b.weight() - t).abs().total_cmp(&(a.weight() - t).abs()))
            .collect(),
        (SortMode::Plates, _) => results
            .into_iter()
            .sorted_by(|a, b| {
                a.min_plates().cmp(&b.min_plates()).then_with(|| match target {
                    Some(t) => (a.weight() - t).abs().total_cmp(&(b.weight() - t).abs()),
                    None => by_weight(a, b),
                })
            })
            .collect(),
        _ => results.into_iter().sorted_by(by_weight).collect(),
    }
}

/// Keeps results whose `min_plates` is in the requested bounds.
///
/// Bounds are first clamped to what the results actually contain, and an
/// inverted pair is resolved by raising the upper bound.
#[must_use]
pub fn filter_by_plates(
    results: Vec<WeightResult>,
    min: Option<usize>,
    max: Option<usize>,
) -> Vec<WeightResult> {
    let Some((lowest, highest)) = results
        .iter()
        .map(WeightResult::min_plates)
        .minmax()
        .into_option()
    else {
        return results;
    };

    let min = min.unwrap_or(lowest).max(lowest);
    let max = max.unwrap_or(highest).min(highest).max(min);

    results
        .into_iter()
        .filter(|r| (min..=max).contains(&r.min_plates()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(weight: f64, min_plates: usize) -> WeightResult {
        WeightResult::new(weight, min_plates, vec![vec![0; min_plates]])
    }

    fn weights(results: &[WeightResult]) -> Vec<f64> {
        results.iter().map(WeightResult::weight).collect()
    }

    #[test]
    fn nearest_and_within_are_inclusive() {
        let results = vec![result(99.5, 1), result(100.0, 1), result(100.75, 2)];
        assert_eq!(weights(&nearest(&results, 100.0, 0.5)), vec![99.5, 100.0]);
        assert_eq!(weights(&within(&results, 100.0, 100.75)), vec![100.0, 100.75]);
    }

    #[test]
    fn sort_modes() {
        let results = vec![result(60.0, 1), result(62.5, 3), result(65.0, 2)];
        let sorted = |mode, target| weights(&sort_results(results.clone(), mode, target));

        assert_eq!(sorted(SortMode::Desc, None), vec![65.0, 62.5, 60.0]);
        assert_eq!(sorted(SortMode::Closest, Some(64.0)), vec![65.0, 62.5, 60.0]);
        assert_eq!(sorted(SortMode::Farthest, Some(64.0)), vec![60.0, 62.5, 65.0]);
        assert_eq!(sorted(SortMode::Plates, Some(64.0)), vec![60.0, 65.0, 62.5]);
        assert_eq!(sorted(SortMode::Closest, None), vec![60.0, 62.5, 65.0]);
    }

    #[test]
    fn plate_filter_clamps_bounds() {
        let results = vec![result(60.0, 1), result(62.5, 3), result(65.0, 2)];
        assert_eq!(
            weights(&filter_by_plates(results.clone(), Some(2), None)),
            vec![62.5, 65.0]
        );
        assert_eq!(
            weights(&filter_by_plates(results.clone(), Some(3), Some(1))),
            vec![62.5]
        );
        assert_eq!(
            weights(&filter_by_plates(results, Some(0), Some(9))).len(),
            3
        );
    }

    #[test]
    fn parses_sort_modes() {
        assert_eq!("plates".parse::<SortMode>().unwrap(), SortMode::Plates);
        assert!("random".parse::<SortMode>().is_err());
    }
}
