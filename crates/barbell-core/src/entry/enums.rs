use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Competition sex category.
///
/// Declaration order is presentation order (F, M, Mx).
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
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Sex {
    F,
    #[default]
    M,
    /// Gender-neutral category. Formulas score it on the men's curve.
    Mx,
}

impl Sex {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownSex(name.to_string()))
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Equipment category, in canonical presentation order.
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
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Equipment {
    Bare,
    #[default]
    Sleeves,
    Wraps,
    #[serde(rename = "Single-ply")]
    #[strum(serialize = "Single-ply")]
    SinglePly,
    #[serde(rename = "Multi-ply")]
    #[strum(serialize = "Multi-ply")]
    MultiPly,
    Unlimited,
}

impl Equipment {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownEquipment(name.to_string()))
    }

    /// Whether the equipment counts as raw for the IPF coefficient tables.
    pub fn is_classic(&self) -> bool {
        matches!(self, Self::Bare | Self::Sleeves | Self::Wraps)
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One of the three powerlifting movements.
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
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Lift {
    #[default]
    S,
    B,
    D,
}

impl Lift {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the expanded lift name (for display and export)
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::S => "Squat",
            Self::B => "Bench",
            Self::D => "Deadlift",
        }
    }
}

impl std::fmt::Display for Lift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of contested lifts, in presentation order (SBD, BD, SB, SD, S, B, D).
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
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Event {
    #[default]
    #[serde(rename = "SBD")]
    #[strum(serialize = "SBD")]
    Sbd,
    #[serde(rename = "BD")]
    #[strum(serialize = "BD")]
    Bd,
    #[serde(rename = "SB")]
    #[strum(serialize = "SB")]
    Sb,
    #[serde(rename = "SD")]
    #[strum(serialize = "SD")]
    Sd,
    S,
    B,
    D,
}

impl Event {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownEvent(name.to_string()))
    }

    /// Contested lifts in S, B, D order.
    pub fn lifts(&self) -> &'static [Lift] {
        match self {
            Self::Sbd => &[Lift::S, Lift::B, Lift::D],
            Self::Bd => &[Lift::B, Lift::D],
            Self::Sb => &[Lift::S, Lift::B],
            Self::Sd => &[Lift::S, Lift::D],
            Self::S => &[Lift::S],
            Self::B => &[Lift::B],
            Self::D => &[Lift::D],
        }
    }

    pub fn contains(&self, lift: Lift) -> bool {
        self.lifts().contains(&lift)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Lettered subgroup of lifters on a platform.
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
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Flight {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Outcome of a single attempt. Serialized as -1, 0 or 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default, FromRepr,
)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum LiftStatus {
    Failed = -1,
    #[default]
    NotAttempted = 0,
    Successful = 1,
}

impl LiftStatus {
    pub fn from_i8(value: i8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn is_taken(&self) -> bool {
        *self != Self::NotAttempted
    }
}

impl TryFrom<i8> for LiftStatus {
    type Error = String;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        Self::from_i8(value).ok_or_else(|| format!("invalid lift status: {}", value))
    }
}

impl From<LiftStatus> for i8 {
    fn from(status: LiftStatus) -> Self {
        status as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_ordering() {
        assert!(Sex::F < Sex::M);
        assert!(Sex::M < Sex::Mx);
        assert!(Event::Sbd < Event::Bd);
        assert!(Event::Sd < Event::S);
        assert!(Equipment::Wraps < Equipment::SinglePly);
        assert!(Equipment::MultiPly < Equipment::Unlimited);
    }

    #[test]
    fn test_event_lifts() {
        assert_eq!(Event::Sbd.lifts(), &[Lift::S, Lift::B, Lift::D]);
        assert_eq!(Event::Bd.lifts(), &[Lift::B, Lift::D]);
        assert!(Event::Sd.contains(Lift::D));
        assert!(!Event::Sd.contains(Lift::B));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Equipment::from_str("Single-ply"), Ok(Equipment::SinglePly));
        assert_eq!(Event::from_str("SBD"), Ok(Event::Sbd));
        assert_eq!(Sex::from_str("Mx"), Ok(Sex::Mx));
        assert!(Equipment::from_str("Double-ply").is_err());
    }

    #[test]
    fn test_parse_reports_unknown_names() {
        assert!(matches!(Sex::parse("X"), Err(Error::UnknownSex(name)) if name == "X"));
        assert!(matches!(Equipment::parse("Double-ply"), Err(Error::UnknownEquipment(_))));
        assert!(matches!(Event::parse("SBDX"), Err(Error::UnknownEvent(_))));
        assert_eq!(Event::parse("BD").ok(), Some(Event::Bd));
    }

    #[test]
    fn test_lift_status_serde() {
        let statuses: Vec<LiftStatus> = serde_json::from_str("[-1, 0, 1]").unwrap();
        assert_eq!(
            statuses,
            vec![
                LiftStatus::Failed,
                LiftStatus::NotAttempted,
                LiftStatus::Successful
            ]
        );
        assert_eq!(serde_json::to_string(&LiftStatus::Failed).unwrap(), "-1");
        assert!(serde_json::from_str::<LiftStatus>("2").is_err());
    }

    #[test]
    fn test_equipment_serde_names() {
        let json = serde_json::to_string(&Equipment::MultiPly).unwrap();
        assert_eq!(json, "\"Multi-ply\"");
    }
}
