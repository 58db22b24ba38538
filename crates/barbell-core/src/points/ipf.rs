//! IPF Points (2019-2020 formula).
//!
//! Defined only for classic and single-ply equipment and for the SBD, S, B and
//! D events. Other equipment is folded into the nearest class; other events
//! score zero.

use crate::entry::{Equipment, Event, Sex};

/// Minimum bodyweight for a non-zero score.
pub const MIN_BODYWEIGHT_KG: f64 = 40.0;

fn parameters(sex: Sex, equipment: Equipment, event: Event) -> Option<[f64; 4]> {
    // Mx is scored as M, the harsher curve.
    let men = !matches!(sex, Sex::F);
    let classic = equipment.is_classic();

    let params = match (men, classic, event) {
        (true, true, Event::Sbd) => [310.67, 857.785, 53.216, 147.0835],
        (true, true, Event::S) => [123.1, 363.085, 25.1667, 75.4311],
        (true, true, Event::B) => [86.4745, 259.155, 17.57845, 53.122],
        (true, true, Event::D) => [103.5355, 244.765, 15.3714, 31.5022],
        (true, false, Event::Sbd) => [387.265, 1121.28, 80.6324, 222.4896],
        (true, false, Event::S) => [150.485, 446.445, 36.5155, 103.7061],
        (true, false, Event::B) => [133.94, 441.465, 35.3938, 113.0057],
        (true, false, Event::D) => [110.135, 263.66, 14.996, 23.011],
        (false, true, Event::Sbd) => [125.1435, 228.03, 34.5246, 86.8301],
        (false, true, Event::S) => [50.479, 105.632, 19.1846, 56.2215],
        (false, true, Event::B) => [25.0485, 43.848, 6.7172, 13.952],
        (false, true, Event::D) => [47.136, 67.349, 9.1555, 13.67],
        (false, false, Event::Sbd) => [176.58, 373.315, 48.4534, 110.0103],
        (false, false, Event::S) => [74.6855, 171.585, 21.9475, 52.2948],
        (false, false, Event::B) => [49.106, 124.209, 23.199, 67.4926],
        (false, false, Event::D) => [51.002, 69.8265, 8.5802, 5.7258],
        _ => return None,
    };
    Some(params)
}

pub fn ipf_points(sex: Sex, equipment: Equipment, event: Event, bodyweight_kg: f64, total_kg: f64) -> f64 {
    if total_kg == 0.0 || bodyweight_kg < MIN_BODYWEIGHT_KG {
        return 0.0;
    }
    let Some([mean_a, mean_b, dev_a, dev_b]) = parameters(sex, equipment, event) else {
        return 0.0;
    };

    let bw_log = bodyweight_kg.ln();
    let mean = mean_a * bw_log - mean_b;
    let dev = dev_a * bw_log - dev_b;

    let points = 500.0 + 100.0 * (total_kg - mean) / dev;
    if points.is_nan() || points < 0.0 { 0.0 } else { points }
}
