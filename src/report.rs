use std::fmt::Display;

use crate::{
    catalog::PlateCatalog, combo::ComboLabels, weight_key::round_hundredths,
    weight_result::WeightResult,
};

/// How far a result is from what was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Miss,
}

impl Badge {
    #[must_use]
    pub fn for_difference(diff: f64) -> Self {
        let diff = diff.abs();
        if diff < 0.01 {
            Badge::Ok
        } else if diff <= 0.25 {
            Badge::Warn
        } else {
            Badge::Miss
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::Ok => write!(f, "ok"),
            Badge::Warn => write!(f, "warn"),
            Badge::Miss => write!(f, "miss"),
        }
    }
}

/// A result rendered as text: a header line, then one line per combo.
pub struct ResultView<'a> {
    pub result: &'a WeightResult,
    pub catalog: &'a PlateCatalog,
    pub target: Option<f64>,
}

impl Display for ResultView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg", self.result.weight())?;
        if let Some(target) = self.target {
            let diff = round_hundredths(self.result.weight() - target);
            write!(f, " ({diff:+.2} kg, {})", Badge::for_difference(diff))?;
        }

        for combo in self.result.combos() {
            write!(
                f,
                "\n  - {}",
                ComboLabels {
                    indices: combo,
                    catalog: self.catalog,
                }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges() {
        assert_eq!(Badge::for_difference(0.0), Badge::Ok);
        assert_eq!(Badge::for_difference(-0.25), Badge::Warn);
        assert_eq!(Badge::for_difference(0.5), Badge::Miss);
    }

    #[test]
    fn renders_labels_and_difference() {
        let catalog = PlateCatalog::standard();
        let result = WeightResult::new(100.0, 2, vec![vec![5, 7], vec![6, 6]]);
        let view = ResultView {
            result: &result,
            catalog: &catalog,
            target: Some(99.8),
        };
        assert_eq!(
            view.to_string(),
            "100.00 kg (+0.20 kg, warn)\n  - [25kg, 15kg]\n  - [20kg, 20kg]"
        );
    }
}
