use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::entry::{Entry, Equipment, Event, Lift, Sex, WeightClass, WeightClassConfig};

/// Lift a record is held in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum RecordLift {
    S,
    B,
    D,
    Total,
}

impl RecordLift {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::S => "Squat",
            Self::B => "Bench",
            Self::D => "Deadlift",
            Self::Total => "Total",
        }
    }
}

impl From<Lift> for RecordLift {
    fn from(lift: Lift) -> Self {
        match lift {
            Lift::S => Self::S,
            Lift::B => Self::B,
            Lift::D => Self::D,
        }
    }
}

impl std::fmt::Display for RecordLift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Full-power records are set in a three-lift event; everything else is a
/// single-lift record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum RecordType {
    FullPower,
    SingleLift,
}

impl RecordType {
    /// Decided by the entry's first registered event.
    pub fn for_entry(entry: &Entry) -> Self {
        match entry.events.first() {
            Some(Event::Sbd) => Self::FullPower,
            _ => Self::SingleLift,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// The category a record is held in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    pub division: String,
    pub sex: Sex,
    pub weight_class: WeightClass,
    pub equipment: Equipment,
    pub record_type: RecordType,
    pub lift: RecordLift,
}

impl RecordKey {
    /// Key an entry competes for in `lift`, under its first division.
    ///
    /// Entries without a division can't hold records.
    pub fn for_entry(entry: &Entry, classes: &WeightClassConfig, lift: RecordLift) -> Option<Self> {
        let division = entry.divisions.first()?;
        Some(Self {
            division: division.clone(),
            sex: entry.sex,
            weight_class: classes.classify(entry.sex, entry.bodyweight_kg),
            equipment: entry.equipment,
            record_type: RecordType::for_entry(entry),
            lift,
        })
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.division,
            self.sex,
            self.weight_class,
            self.equipment,
            self.record_type,
            self.lift.expand_name()
        )
    }
}

/// One record, as imported or as set at this meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingRecord {
    pub division: String,
    pub sex: Sex,
    pub weight_class: WeightClass,
    pub equipment: Equipment,
    pub record_type: RecordType,
    pub lift: RecordLift,
    pub weight_kg: f64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
}

impl LiftingRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            division: self.division.clone(),
            sex: self.sex,
            weight_class: self.weight_class,
            equipment: self.equipment,
            record_type: self.record_type,
            lift: self.lift,
        }
    }
}

/// Current record in every category that has one.
///
/// Serialized as a plain list of records; a later record with the same key
/// replaces an earlier one on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LiftingRecord>", into = "Vec<LiftingRecord>")]
pub struct RecordBook {
    records: BTreeMap<RecordKey, LiftingRecord>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<&LiftingRecord> {
        self.records.get(key)
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &LiftingRecord> {
        self.records.values()
    }

    /// Insert or replace the record for its key, returning the old one.
    pub fn upsert(&mut self, record: LiftingRecord) -> Option<LiftingRecord> {
        self.records.insert(record.key(), record)
    }

    /// Whether `weight_kg` beats the record held for `key`.
    ///
    /// An empty category is broken by any weight.
    pub fn would_break(&self, key: &RecordKey, weight_kg: f64) -> bool {
        match self.records.get(key) {
            Some(record) => weight_kg > record.weight_kg,
            None => true,
        }
    }
}

impl From<Vec<LiftingRecord>> for RecordBook {
    fn from(records: Vec<LiftingRecord>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.upsert(record);
        }
        book
    }
}

impl From<RecordBook> for Vec<LiftingRecord> {
    fn from(book: RecordBook) -> Self {
        book.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(division: &str, lift: RecordLift, weight_kg: f64) -> LiftingRecord {
        LiftingRecord {
            division: division.to_string(),
            sex: Sex::M,
            weight_class: WeightClass::UpTo(9300),
            equipment: Equipment::Sleeves,
            record_type: RecordType::FullPower,
            lift,
            weight_kg,
            full_name: "Holder".to_string(),
            date: None,
            location: String::new(),
        }
    }

    #[test]
    fn test_record_type_for_entry() {
        let mut entry = Entry::new(1);
        assert_eq!(RecordType::for_entry(&entry), RecordType::SingleLift);
        entry.events = vec![Event::Sbd, Event::B];
        assert_eq!(RecordType::for_entry(&entry), RecordType::FullPower);
        entry.events = vec![Event::B, Event::Sbd];
        assert_eq!(RecordType::for_entry(&entry), RecordType::SingleLift);
    }

    #[test]
    fn test_key_needs_division() {
        let mut entry = Entry::new(1);
        entry.bodyweight_kg = 90.0;
        entry.events = vec![Event::Sbd];
        let classes = WeightClassConfig::default();
        assert!(RecordKey::for_entry(&entry, &classes, RecordLift::S).is_none());

        entry.divisions = vec!["Open".to_string(), "Juniors".to_string()];
        let key = RecordKey::for_entry(&entry, &classes, RecordLift::Total).unwrap();
        assert_eq!(key.division, "Open");
        assert_eq!(key.weight_class, WeightClass::UpTo(9300));
        assert_eq!(key.to_string(), "Open M 93 Sleeves FullPower Total");
    }

    #[test]
    fn test_would_break() {
        let mut book = RecordBook::new();
        let open_squat = record("Open", RecordLift::S, 200.0);
        let key = open_squat.key();
        assert!(book.would_break(&key, 0.5));

        book.upsert(open_squat);
        assert!(!book.would_break(&key, 200.0));
        assert!(book.would_break(&key, 200.5));

        let juniors = record("Juniors", RecordLift::S, 0.0).key();
        assert!(book.would_break(&juniors, 100.0));
    }

    #[test]
    fn test_later_duplicate_replaces_earlier() {
        let book = RecordBook::from(vec![
            record("Open", RecordLift::B, 150.0),
            record("Open", RecordLift::D, 250.0),
            record("Open", RecordLift::B, 155.0),
        ]);
        assert_eq!(book.len(), 2);
        let bench = record("Open", RecordLift::B, 0.0).key();
        assert_eq!(book.get(&bench).map(|r| r.weight_kg), Some(155.0));
    }

    #[test]
    fn test_serializes_as_list() {
        let book = RecordBook::from(vec![record("Open", RecordLift::Total, 600.0)]);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"recordType\":\"FullPower\""));
        assert!(json.contains("\"weightKg\":600.0"));

        let back: RecordBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
