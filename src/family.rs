use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::picker_error::PickerError;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Kg,
    Lb,
}

impl Family {
    #[must_use]
    pub fn kg() -> Family {
        Family::Kg
    }

    #[must_use]
    pub fn lb() -> Family {
        Family::Lb
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Kg => write!(f, "kg"),
            Family::Lb => write!(f, "lb"),
        }
    }
}

impl FromStr for Family {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Family::Kg),
            "lb" | "lbs" => Ok(Family::Lb),
            _ => Err(PickerError::UnknownFamily(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_families() {
        assert_eq!("kg".parse::<Family>().unwrap(), Family::Kg);
        assert_eq!("LB".parse::<Family>().unwrap(), Family::Lb);
        assert!("stone".parse::<Family>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let fam: Family = serde_json::from_str("\"lb\"").unwrap();
        assert_eq!(fam, Family::Lb);
        assert_eq!(serde_json::to_string(&Family::Kg).unwrap(), "\"kg\"");
    }
}
