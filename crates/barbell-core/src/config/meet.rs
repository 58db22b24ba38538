use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::barload::Plate;
use crate::config::{plates, weight_classes};
use crate::entry::{Entry, Lift, WeightClassConfig};
use crate::error::{Error, Result};
use crate::order::LiftingState;
use crate::place::EquipmentMergePolicy;
use crate::points::{AgeCoefficients, Formula};
use crate::records::RecordBook;
use crate::units::WeightUnit;

/// Bar plus collars weight for each lift, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarWeights {
    pub squat_kg: f64,
    pub bench_kg: f64,
    pub deadlift_kg: f64,
}

impl BarWeights {
    pub fn for_lift(&self, lift: Lift) -> f64 {
        match lift {
            Lift::S => self.squat_kg,
            Lift::B => self.bench_kg,
            Lift::D => self.deadlift_kg,
        }
    }
}

impl Default for BarWeights {
    fn default() -> Self {
        Self {
            squat_kg: plates::BAR_AND_COLLARS_KG,
            bench_kg: plates::BAR_AND_COLLARS_KG,
            deadlift_kg: plates::BAR_AND_COLLARS_KG,
        }
    }
}

impl Default for WeightClassConfig {
    fn default() -> Self {
        Self {
            men_kg: weight_classes::MEN_KG.to_vec(),
            women_kg: weight_classes::WOMEN_KG.to_vec(),
            mx_kg: weight_classes::MX_KG.to_vec(),
        }
    }
}

/// Settings that apply to the whole meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetConfig {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub unit: WeightUnit,
    pub formula: Formula,
    pub age_coefficients: AgeCoefficients,
    pub weight_classes: WeightClassConfig,
    pub equipment_merge: EquipmentMergePolicy,
    pub bar_and_collars: BarWeights,
    pub plates: Vec<Plate>,
}

impl Default for MeetConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: None,
            unit: WeightUnit::Kg,
            formula: Formula::default(),
            age_coefficients: AgeCoefficients::default(),
            weight_classes: WeightClassConfig::default(),
            equipment_merge: EquipmentMergePolicy::default(),
            bar_and_collars: BarWeights::default(),
            plates: plates::default_plates(),
        }
    }
}

impl MeetConfig {
    pub fn validate(&self) -> Result<()> {
        let classes = [
            ("men", &self.weight_classes.men_kg),
            ("women", &self.weight_classes.women_kg),
            ("mx", &self.weight_classes.mx_kg),
        ];
        for (label, list) in classes {
            if list.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                return Err(Error::ConfigParseError(format!(
                    "{} weight classes must be positive",
                    label
                )));
            }
            if !list.windows(2).all(|w| w[0] < w[1]) {
                return Err(Error::ConfigParseError(format!(
                    "{} weight classes must be strictly ascending",
                    label
                )));
            }
        }

        for lift in [Lift::S, Lift::B, Lift::D] {
            let bar = self.bar_and_collars.for_lift(lift);
            if !bar.is_finite() || bar < 0.0 {
                return Err(Error::ConfigParseError(format!(
                    "{} bar weight must be non-negative, got {}",
                    lift.expand_name(),
                    bar
                )));
            }
        }

        if let Some(plate) = self
            .plates
            .iter()
            .find(|p| !p.weight_kg.is_finite() || p.weight_kg <= 0.0)
        {
            return Err(Error::ConfigParseError(format!(
                "plate weight must be positive, got {}",
                plate.weight_kg
            )));
        }

        Ok(())
    }
}

/// A complete snapshot of a meet: configuration, entries and lifting cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meet {
    #[serde(rename = "meet")]
    pub config: MeetConfig,
    pub entries: Vec<Entry>,
    pub lifting: LiftingState,
    /// Records imported before the meet, plus any confirmed since.
    pub records: RecordBook,
}

impl Meet {
    /// Load and validate a meet snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let meet = Self::parse(&content)?;
        info!(
            "Loaded meet {:?} with {} entries from {}",
            meet.config.name,
            meet.entries.len(),
            path.display()
        );
        Ok(meet)
    }

    /// Parse and validate a meet snapshot from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        let meet: Self = serde_json::from_str(content)?;
        meet.validate()?;
        Ok(meet)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(Error::DuplicateEntryId(entry.id));
            }
            entry.validate()?;
        }

        debug!("Validated {} entries", self.entries.len());
        Ok(())
    }

    pub fn entry(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MeetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bar_and_collars.for_lift(Lift::B), 25.0);
        assert_eq!(config.weight_classes.men_kg.len(), 7);
    }

    #[test]
    fn test_parse_minimal_meet() {
        let meet = Meet::parse(r#"{"entries": [{"id": 1, "name": "A"}]}"#).unwrap();
        assert_eq!(meet.entries.len(), 1);
        assert_eq!(meet.config.unit, WeightUnit::Kg);
        assert_eq!(meet.lifting.day, 1);
    }

    #[test]
    fn test_parse_meet_settings() {
        let json = r#"{
            "meet": {
                "name": "Spring Open",
                "date": "2019-03-02",
                "unit": "lbs",
                "formula": "IPF GL Points",
                "ageCoefficients": "FosterMcCulloch",
                "equipmentMerge": {"combineSleevesAndWraps": true},
                "barAndCollars": {"squatKg": 25, "benchKg": 20, "deadliftKg": 25}
            }
        }"#;
        let meet = Meet::parse(json).unwrap();

        assert_eq!(meet.config.unit, WeightUnit::Lbs);
        assert_eq!(meet.config.formula, Formula::IpfGlPoints);
        assert_eq!(meet.config.age_coefficients, AgeCoefficients::FosterMcCulloch);
        assert!(meet.config.equipment_merge.combine_sleeves_and_wraps);
        assert!(!meet.config.equipment_merge.combine_single_and_multi);
        assert_eq!(meet.config.bar_and_collars.for_lift(Lift::B), 20.0);
        assert_eq!(meet.config.date, NaiveDate::from_ymd_opt(2019, 3, 2));
    }

    #[test]
    fn test_parse_records() {
        let json = r#"{
            "entries": [{"id": 1, "canBreakRecords": false}, {"id": 2}],
            "records": [{
                "division": "Open",
                "sex": "F",
                "weightClass": {"UpTo": 6300},
                "equipment": "Sleeves",
                "recordType": "SingleLift",
                "lift": "B",
                "weightKg": 100
            }]
        }"#;
        let meet = Meet::parse(json).unwrap();

        assert!(!meet.entries[0].can_break_records);
        assert!(meet.entries[1].can_break_records);
        assert_eq!(meet.records.len(), 1);
        let record = meet.records.iter().next().unwrap();
        assert_eq!(record.weight_kg, 100.0);
        assert_eq!(record.full_name, "");
    }

    #[test]
    fn test_duplicate_entry_ids_rejected() {
        let json = r#"{"entries": [{"id": 4}, {"id": 4}]}"#;
        assert!(matches!(Meet::parse(json), Err(Error::DuplicateEntryId(4))));
    }

    #[test]
    fn test_unordered_weight_classes_rejected() {
        let json = r#"{"meet": {"weightClasses": {"menKg": [93, 83], "womenKg": [], "mxKg": []}}}"#;
        assert!(matches!(Meet::parse(json), Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_unknown_formula_rejected() {
        let json = r#"{"meet": {"formula": "Sinclair"}}"#;
        assert!(matches!(Meet::parse(json), Err(Error::Json(_))));
    }
}
