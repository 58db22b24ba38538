use serde::{Deserialize, Serialize};

use crate::entry::Sex;
use crate::units::display_weight;

/// A bodyweight class, stored in hundredths of a kilogram.
///
/// `UpTo` classes sort before the open-ended `Over` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    UpTo(u32),
    Over(u32),
}

impl WeightClass {
    /// Class for `bodyweight_kg`: the first boundary it doesn't exceed,
    /// otherwise the open class above the last boundary.
    pub fn for_bodyweight(classes_kg: &[f64], bodyweight_kg: f64) -> Self {
        match classes_kg.iter().find(|&&limit| bodyweight_kg <= limit) {
            Some(&limit) => Self::UpTo(to_hundredths(limit)),
            None => Self::Over(classes_kg.last().copied().map(to_hundredths).unwrap_or(0)),
        }
    }

    pub fn limit_kg(&self) -> f64 {
        match *self {
            Self::UpTo(h) | Self::Over(h) => f64::from(h) / 100.0,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Over(_))
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpTo(_) => write!(f, "{}", display_weight(self.limit_kg())),
            Self::Over(_) => write!(f, "{}+", display_weight(self.limit_kg())),
        }
    }
}

fn to_hundredths(kg: f64) -> u32 {
    (kg.max(0.0) * 100.0).round() as u32
}

/// Class boundaries for each sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightClassConfig {
    pub men_kg: Vec<f64>,
    pub women_kg: Vec<f64>,
    pub mx_kg: Vec<f64>,
}

impl WeightClassConfig {
    pub fn for_sex(&self, sex: Sex) -> &[f64] {
        match sex {
            Sex::M => &self.men_kg,
            Sex::F => &self.women_kg,
            Sex::Mx => &self.mx_kg,
        }
    }

    pub fn classify(&self, sex: Sex, bodyweight_kg: f64) -> WeightClass {
        WeightClass::for_bodyweight(self.for_sex(sex), bodyweight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEN: [f64; 8] = [59.0, 66.0, 74.0, 83.0, 93.0, 105.0, 120.0, 0.0];

    #[test]
    fn test_for_bodyweight() {
        let classes = &MEN[..7];
        assert_eq!(WeightClass::for_bodyweight(classes, 59.0), WeightClass::UpTo(5900));
        assert_eq!(WeightClass::for_bodyweight(classes, 59.01), WeightClass::UpTo(6600));
        assert_eq!(WeightClass::for_bodyweight(classes, 130.0), WeightClass::Over(12000));
    }

    #[test]
    fn test_empty_classes_are_open() {
        let class = WeightClass::for_bodyweight(&[], 90.0);
        assert_eq!(class, WeightClass::Over(0));
        assert_eq!(class.to_string(), "0+");
    }

    #[test]
    fn test_display() {
        assert_eq!(WeightClass::UpTo(9300).to_string(), "93");
        assert_eq!(WeightClass::UpTo(5250).to_string(), "52.5");
        assert_eq!(WeightClass::Over(12000).to_string(), "120+");
    }

    #[test]
    fn test_open_class_sorts_last() {
        assert!(WeightClass::UpTo(12000) < WeightClass::Over(5900));
        assert!(WeightClass::UpTo(5900) < WeightClass::UpTo(6600));
    }
}
