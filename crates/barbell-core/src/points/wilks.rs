//! Wilks points (original 1990s coefficients).

use crate::entry::Sex;

fn wilks_poly(coefficients: [f64; 6], x: f64) -> f64 {
    let [a, b, c, d, e, f] = coefficients;
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    let x5 = x4 * x;
    500.0 / (a + b * x + c * x2 + d * x3 + e * x4 + f * x5)
}

pub fn wilks_men(bodyweight_kg: f64) -> f64 {
    let normalized = bodyweight_kg.clamp(40.0, 201.9);
    wilks_poly(
        [-216.0475144, 16.2606339, -0.002388645, -0.00113732, 7.01863e-6, -1.291e-8],
        normalized,
    )
}

pub fn wilks_women(bodyweight_kg: f64) -> f64 {
    let normalized = bodyweight_kg.clamp(26.51, 154.53);
    wilks_poly(
        [
            594.31747775582,
            -27.23842536447,
            0.82112226871,
            -0.00930733913,
            0.00004731582,
            -0.00000009054,
        ],
        normalized,
    )
}

pub fn wilks(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => wilks_men(bodyweight_kg) * total_kg,
        Sex::F => wilks_women(bodyweight_kg) * total_kg,
    }
}
