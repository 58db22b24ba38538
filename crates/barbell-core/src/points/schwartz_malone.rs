//! Schwartz (men) and Malone (women) coefficients.
//!
//! Schwartz is the published 1982 polynomial up to 126kg, followed by linear
//! pieces. The last piece uses the slope of the printed coefficient tables
//! (0.0004 per pound), since the published formula disagrees with them.

use crate::entry::Sex;

pub fn schwartz_coefficient(bodyweight_kg: f64) -> f64 {
    let adjusted = bodyweight_kg.clamp(40.0, 166.0);

    if adjusted <= 126.0 {
        let x0 = 0.631926 * 10.0;
        let x1 = 0.262349 * adjusted;
        let x2 = 0.51155e-2 * adjusted.powi(2);
        let x3 = 0.519738e-4 * adjusted.powi(3);
        let x4 = 0.267626e-6 * adjusted.powi(4);
        let x5 = 0.540132e-9 * adjusted.powi(5);
        let x6 = 0.728875e-13 * adjusted.powi(6);
        x0 - x1 + x2 - x3 + x4 - x5 - x6
    } else if adjusted <= 136.0 {
        0.521 - 0.0012 * (adjusted - 125.0)
    } else if adjusted <= 146.0 {
        0.509 - 0.0011 * (adjusted - 135.0)
    } else if adjusted <= 156.0 {
        0.498 - 0.001 * (adjusted - 145.0)
    } else {
        0.4879 - 0.00088185 * (adjusted - 155.0)
    }
}

/// Fitted to the Malone coefficient tables.
pub fn malone_coefficient(bodyweight_kg: f64) -> f64 {
    const A: f64 = 106.011586323613;
    const B: f64 = -1.293027130579051;
    const C: f64 = 0.322935585328304;

    // Lower bound is where Malone meets the Wilks maximum.
    let adjusted = bodyweight_kg.max(29.24);
    A * adjusted.powf(B) + C
}

pub fn schwartz_malone(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => schwartz_coefficient(bodyweight_kg) * total_kg,
        Sex::F => malone_coefficient(bodyweight_kg) * total_kg,
    }
}
