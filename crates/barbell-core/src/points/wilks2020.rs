//! Wilks2020 points, the refitted Wilks curve scaled to 600.

use crate::entry::Sex;

fn wilks2020_poly(coefficients: [f64; 6], x: f64) -> f64 {
    let [a, b, c, d, e, f] = coefficients;
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    let x5 = x4 * x;
    600.0 / (a + b * x + c * x2 + d * x3 + e * x4 + f * x5)
}

pub fn wilks2020_men(bodyweight_kg: f64) -> f64 {
    let normalized = bodyweight_kg.clamp(40.0, 200.95);
    wilks2020_poly(
        [
            47.4617885411949,
            8.47206137941125,
            0.073694103462609,
            -0.00139583381094385,
            0.00000707665973070743,
            -0.0000000120804336482315,
        ],
        normalized,
    )
}

pub fn wilks2020_women(bodyweight_kg: f64) -> f64 {
    let normalized = bodyweight_kg.clamp(40.0, 150.95);
    wilks2020_poly(
        [
            -125.425539779509,
            13.7121941940668,
            -0.0330725063103405,
            -0.0010504000506583,
            0.00000938773881462799,
            -0.000000023334613884954,
        ],
        normalized,
    )
}

pub fn wilks2020(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => wilks2020_men(bodyweight_kg) * total_kg,
        Sex::F => wilks2020_women(bodyweight_kg) * total_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wilks2020_reference_value() {
        assert!((wilks2020(Sex::M, 100.0, 500.0) - 364.6810).abs() < 1e-3);
    }

    #[test]
    fn test_wilks2020_clamps_bodyweight() {
        assert_eq!(wilks2020_women(200.0), wilks2020_women(150.95));
    }
}
