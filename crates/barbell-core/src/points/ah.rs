//! AH (Haleczko) points, used in ParaPL bench-only meets.
//!
//! The federation spreadsheet defines the coefficient as
//! `ROUND(K1 / POWER(LOG(bodyweight), K2) * lift, 2)`.

use crate::entry::Sex;

fn ah_men(bodyweight_kg: f64) -> f64 {
    const K1: f64 = 3.2695;
    const K2: f64 = 1.95;

    let adjusted = bodyweight_kg.clamp(32.0, 157.0);
    K1 / adjusted.log10().powf(K2)
}

fn ah_women(bodyweight_kg: f64) -> f64 {
    const K1: f64 = 2.7566;
    const K2: f64 = 1.8;

    let adjusted = bodyweight_kg.clamp(28.0, 112.0);
    K1 / adjusted.log10().powf(K2)
}

pub fn ah(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => ah_men(bodyweight_kg) * total_kg,
        Sex::F => ah_women(bodyweight_kg) * total_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ah_reference_value() {
        assert!((ah(Sex::M, 100.0, 500.0) - 423.0998).abs() < 1e-3);
    }

    #[test]
    fn test_ah_women_curve_differs() {
        assert!(ah(Sex::F, 60.0, 100.0) != ah(Sex::M, 60.0, 100.0));
    }
}
