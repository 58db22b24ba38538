//! Dots points ("Dynamic Objective Team Scoring").
//!
//! Introduced by the German IPF affiliate BVDK for mixed-sex team scoring.

use crate::entry::Sex;

fn dots_poly(coefficients: [f64; 5], x: f64) -> f64 {
    let [a, b, c, d, e] = coefficients;
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    500.0 / (a * x4 + b * x3 + c * x2 + d * x + e)
}

pub fn dots_men(bodyweight_kg: f64) -> f64 {
    let adjusted = bodyweight_kg.clamp(40.0, 210.0);
    dots_poly(
        [-0.000001093, 0.0007391293, -0.1918759221, 24.0900756, -307.75076],
        adjusted,
    )
}

pub fn dots_women(bodyweight_kg: f64) -> f64 {
    let adjusted = bodyweight_kg.clamp(40.0, 150.0);
    dots_poly(
        [-0.0000010706, 0.0005158568, -0.1126655495, 13.6175032, -57.96288],
        adjusted,
    )
}

pub fn dots(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    if bodyweight_kg == 0.0 || total_kg == 0.0 {
        return 0.0;
    }
    match sex {
        Sex::M | Sex::Mx => dots_men(bodyweight_kg) * total_kg,
        Sex::F => dots_women(bodyweight_kg) * total_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_reference_values() {
        assert!((dots(Sex::M, 100.0, 500.0) - 307.7579).abs() < 1e-3);
        assert!((dots(Sex::F, 60.0, 400.0) - 443.4182).abs() < 1e-3);
    }

    #[test]
    fn test_dots_zero_inputs() {
        assert_eq!(dots(Sex::M, 0.0, 500.0), 0.0);
        assert_eq!(dots(Sex::F, 60.0, 0.0), 0.0);
    }
}
