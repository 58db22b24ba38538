//! Points formulas.
//!
//! Every formula is a pure function of sex, bodyweight and total (some also
//! take equipment and event). Bodyweight is clamped into each formula's
//! domain rather than rejected, and degenerate input always scores zero.
//!
//! - `Formula` - the selectable formulas
//! - `AgeCoefficients` - optional age multipliers applied after the formula
//! - `Scorer` - a formula bound to a meet's unit, date and age table

mod ah;
mod bodyweight_multiple;
mod dots;
mod foster_mcculloch;
mod glossbrenner;
mod goodlift;
mod ipf;
mod nasa;
mod reshel;
mod schwartz_malone;
mod wilks;
mod wilks2020;

pub use ah::ah;
pub use bodyweight_multiple::bodyweight_multiple;
pub use dots::{dots, dots_men, dots_women};
pub use foster_mcculloch::foster_mcculloch;
pub use glossbrenner::glossbrenner;
pub use goodlift::goodlift;
pub use ipf::ipf_points;
pub use nasa::nasa_points;
pub use reshel::reshel;
pub use schwartz_malone::{malone_coefficient, schwartz_coefficient, schwartz_malone};
pub use wilks::{wilks, wilks_men, wilks_women};
pub use wilks2020::wilks2020;

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::config::MeetConfig;
use crate::entry::{Entry, Equipment, Event, Sex};
use crate::error::{Error, Result};
use crate::units::WeightUnit;

/// A points formula.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Formula {
    #[serde(rename = "AH")]
    #[strum(serialize = "AH")]
    Ah,
    #[serde(rename = "Bodyweight Multiple")]
    #[strum(serialize = "Bodyweight Multiple")]
    BodyweightMultiple,
    #[default]
    Dots,
    Glossbrenner,
    #[serde(rename = "IPF GL Points")]
    #[strum(serialize = "IPF GL Points")]
    IpfGlPoints,
    #[serde(rename = "IPF Points")]
    #[strum(serialize = "IPF Points")]
    IpfPoints,
    #[serde(rename = "NASA Points")]
    #[strum(serialize = "NASA Points")]
    NasaPoints,
    Reshel,
    #[serde(rename = "Schwartz/Malone")]
    #[strum(serialize = "Schwartz/Malone")]
    SchwartzMalone,
    Total,
    Wilks,
    Wilks2020,
}

impl Formula {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Parse a formula by its display name.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownFormula(name.to_string()))
    }

    /// Score a kilogram total. `Total` scores as the kilogram total itself.
    pub fn evaluate(
        &self,
        sex: Sex,
        equipment: Equipment,
        event: Event,
        bodyweight_kg: f64,
        total_kg: f64,
    ) -> f64 {
        if total_kg <= 0.0 {
            return 0.0;
        }
        if *self != Self::Total && bodyweight_kg <= 0.0 {
            return 0.0;
        }

        let points = match self {
            Self::Ah => ah(sex, bodyweight_kg, total_kg),
            Self::BodyweightMultiple => bodyweight_multiple(bodyweight_kg, total_kg),
            Self::Dots => dots(sex, bodyweight_kg, total_kg),
            Self::Glossbrenner => glossbrenner(sex, bodyweight_kg, total_kg),
            Self::IpfGlPoints => goodlift(sex, equipment, event, bodyweight_kg, total_kg),
            Self::IpfPoints => ipf_points(sex, equipment, event, bodyweight_kg, total_kg),
            Self::NasaPoints => nasa_points(bodyweight_kg, total_kg),
            Self::Reshel => reshel(sex, bodyweight_kg, total_kg),
            Self::SchwartzMalone => schwartz_malone(sex, bodyweight_kg, total_kg),
            Self::Total => total_kg,
            Self::Wilks => wilks(sex, bodyweight_kg, total_kg),
            Self::Wilks2020 => wilks2020(sex, bodyweight_kg, total_kg),
        };
        sanitize(points)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Age multiplier table applied on top of a formula.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum AgeCoefficients {
    #[default]
    None,
    FosterMcCulloch,
}

impl AgeCoefficients {
    pub fn multiplier(&self, age: u32) -> f64 {
        match self {
            Self::None => 1.0,
            Self::FosterMcCulloch => foster_mcculloch(age),
        }
    }
}

/// Map NaN, infinite and negative results to zero.
pub fn sanitize(points: f64) -> f64 {
    if points.is_finite() && points > 0.0 {
        points
    } else {
        0.0
    }
}

/// A formula bound to the settings of one meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub formula: Formula,
    pub age_coefficients: AgeCoefficients,
    pub unit: WeightUnit,
    pub meet_date: Option<NaiveDate>,
}

impl Scorer {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            age_coefficients: AgeCoefficients::None,
            unit: WeightUnit::Kg,
            meet_date: None,
        }
    }

    pub fn from_config(config: &MeetConfig) -> Self {
        Self {
            formula: config.formula,
            age_coefficients: config.age_coefficients,
            unit: config.unit,
            meet_date: config.date,
        }
    }

    /// Points for `total_kg` scored with the entry's sex, equipment and bodyweight.
    pub fn points(&self, entry: &Entry, event: Event, total_kg: f64) -> f64 {
        match self.formula {
            Formula::Total => sanitize(self.unit.convert(total_kg)),
            formula => formula.evaluate(
                entry.sex,
                entry.equipment,
                event,
                entry.bodyweight_kg,
                total_kg,
            ),
        }
    }

    /// Points multiplied by the entry's age coefficient.
    pub fn age_adjusted_points(&self, entry: &Entry, event: Event, total_kg: f64) -> f64 {
        let points = self.points(entry, event, total_kg);
        match self.age_coefficients {
            AgeCoefficients::None => points,
            coefficients => {
                let age = entry.age_at_meet(self.meet_date);
                sanitize(coefficients.multiplier(age) * points)
            }
        }
    }
}
