use std::{fmt::Display, str::FromStr};

use crate::picker_error::PickerError;

/// What the lifter asked for, before it becomes a search window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Exact(f64),
    Range { min: f64, max: f64 },
    /// `percent` of a one-rep max.
    PercentOf { percent: f64, max_lift: f64 },
}

impl Target {
    /// The single weight this target aims at, if it has one.
    #[must_use]
    pub fn reference(&self) -> Option<f64> {
        match *self {
            Target::Exact(kg) => Some(kg),
            Target::Range { .. } => None,
            Target::PercentOf { percent, max_lift } => Some(max_lift * percent / 100.0),
        }
    }

    /// Inclusive window, widened by `tolerance` around a single-weight target.
    #[must_use]
    pub fn window(&self, tolerance: f64) -> (f64, f64) {
        match (*self, self.reference()) {
            (Target::Range { min, max }, _) => (min.min(max), min.max(max)),
            (_, Some(kg)) => {
                let tolerance = tolerance.abs();
                (kg - tolerance, kg + tolerance)
            }
            (_, None) => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Exact(kg) => write!(f, "{kg}kg"),
            Target::Range { min, max } => write!(f, "{min}..{max}kg"),
            Target::PercentOf { percent, max_lift } => write!(f, "{percent}% of {max_lift}kg"),
        }
    }
}

impl FromStr for Target {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PickerError::InvalidTarget(s.to_string());
        let number = |text: &str| {
            text.trim()
                .trim_end_matches("kg")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(invalid)
        };

        if let Some((min, max)) = s.split_once("..") {
            return Ok(Target::Range {
                min: number(min)?,
                max: number(max)?,
            });
        }
        if let Some((percent, max_lift)) = s.split_once('%') {
            return Ok(Target::PercentOf {
                percent: number(percent)?,
                max_lift: number(max_lift)?,
            });
        }
        number(s).map(Target::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_form() {
        assert_eq!("100".parse::<Target>().unwrap(), Target::Exact(100.0));
        assert_eq!("62.5kg".parse::<Target>().unwrap(), Target::Exact(62.5));
        assert_eq!(
            "80..120".parse::<Target>().unwrap(),
            Target::Range {
                min: 80.0,
                max: 120.0
            }
        );
        assert_eq!(
            "85%140".parse::<Target>().unwrap(),
            Target::PercentOf {
                percent: 85.0,
                max_lift: 140.0
            }
        );
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "heavy", "80..", "%140", "nan", "inf"] {
            assert!(text.parse::<Target>().is_err(), "{text} parsed");
        }
    }

    #[test]
    fn windows() {
        assert_eq!(Target::Exact(100.0).window(0.5), (99.5, 100.5));
        assert_eq!(Target::Range { min: 120.0, max: 80.0 }.window(3.0), (80.0, 120.0));
        let (lo, hi) = Target::PercentOf {
            percent: 50.0,
            max_lift: 200.0,
        }
        .window(0.0);
        assert!((lo - 100.0).abs() < 1e-9 && (hi - 100.0).abs() < 1e-9);
    }
}
