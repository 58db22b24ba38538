//! Weight unit conversion and display rounding.
//!
//! All engine weights are kilograms. Conversion to pounds and the rounding
//! used for display live here so every renderer produces identical strings.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462262;

/// Relative nudge applied before rounding, absorbing binary drift such as
/// `127.05 * 100 == 12704.999999999998`.
const DRIFT_EPSILON: f64 = 1e-9;

/// Unit a meet is run in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }

    pub fn is_kg(&self) -> bool {
        *self == Self::Kg
    }

    /// Convert a kilogram weight into this unit.
    pub fn convert(&self, kg: f64) -> f64 {
        match self {
            Self::Kg => kg,
            Self::Lbs => kg_to_lbs(kg),
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Render a weight rounded half-up to two decimal places, without trailing zeros.
pub fn display_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return "0".to_string();
    }
    let hundredths = nudged(weight * 100.0).round() as i64;
    format_fixed(hundredths, 2)
}

/// Render a weight truncated to one decimal place, without trailing zeros.
pub fn display_weight_one_place(weight: f64) -> String {
    if !weight.is_finite() {
        return "0".to_string();
    }
    let tenths = nudged(weight * 10.0).trunc() as i64;
    format_fixed(tenths, 1)
}

/// Parse a string produced by [`display_weight`] back into a number.
///
/// Used where inputs must match their displayed value exactly.
pub fn rounded(weight: f64) -> f64 {
    display_weight(weight).parse().unwrap_or(0.0)
}

fn nudged(scaled: f64) -> f64 {
    scaled + scaled.signum() * scaled.abs().max(1.0) * DRIFT_EPSILON
}

fn format_fixed(scaled: i64, places: u32) -> String {
    if scaled == 0 {
        return "0".to_string();
    }

    let divisor = 10_i64.pow(places);
    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    let whole = magnitude / divisor as u64;
    let mut fraction = magnitude % divisor as u64;

    if fraction == 0 {
        return format!("{}{}", sign, whole);
    }

    let mut width = places as usize;
    while fraction % 10 == 0 {
        fraction /= 10;
        width -= 1;
    }
    format!("{}{}.{:0width$}", sign, whole, fraction, width = width)
}
