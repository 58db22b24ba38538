//! IPF GL (Goodlift) Points.
//!
//! Defined for the SBD and B events only.

use crate::entry::{Equipment, Event, Sex};

/// Minimum bodyweight for a non-zero score.
pub const MIN_BODYWEIGHT_KG: f64 = 40.0;

fn parameters(sex: Sex, equipment: Equipment, event: Event) -> Option<[f64; 3]> {
    let men = !matches!(sex, Sex::F);
    let classic = equipment.is_classic();

    let params = match (men, classic, event) {
        (true, true, Event::Sbd) => [1199.72839, 1025.18162, 0.00921],
        (true, true, Event::B) => [320.98041, 281.40258, 0.01008],
        (true, false, Event::Sbd) => [1236.25115, 1449.21864, 0.01644],
        (true, false, Event::B) => [381.22073, 733.79378, 0.02398],
        (false, true, Event::Sbd) => [610.32796, 1045.59282, 0.03048],
        (false, true, Event::B) => [142.40398, 442.52671, 0.04724],
        (false, false, Event::Sbd) => [758.63878, 949.31382, 0.02435],
        (false, false, Event::B) => [221.82209, 357.00377, 0.02937],
        _ => return None,
    };
    Some(params)
}

pub fn goodlift(sex: Sex, equipment: Equipment, event: Event, bodyweight_kg: f64, total_kg: f64) -> f64 {
    if total_kg == 0.0 || bodyweight_kg < MIN_BODYWEIGHT_KG {
        return 0.0;
    }
    let Some([a, b, c]) = parameters(sex, equipment, event) else {
        return 0.0;
    };

    let denom = a - b * (-c * bodyweight_kg).exp();
    let points = if denom == 0.0 {
        0.0
    } else {
        (total_kg * 100.0 / denom).max(0.0)
    };
    if points.is_nan() { 0.0 } else { points }
}
