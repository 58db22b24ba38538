//! Reshel points.
//!
//! Reshel is published only as a rounded table; these curves are fitted to
//! it and agree to about 0.01, worst between 70 and 80kg for men.

use crate::entry::Sex;

pub fn reshel_men(bodyweight_kg: f64) -> f64 {
    const A: f64 = 23740.8329088123;
    const B: f64 = -9.75618720662844;
    const C: f64 = 0.787990994925928;
    const D: f64 = -2.68445158813578;

    let normalized = bodyweight_kg.clamp(50.0, 174.75);
    A * (normalized + B).powf(D) + C
}

pub fn reshel_women(bodyweight_kg: f64) -> f64 {
    const A: f64 = 239.894659799145;
    const B: f64 = -20.5105859285582;
    const C: f64 = 1.16052601684125;
    const D: f64 = -1.61417872668708;

    let normalized = bodyweight_kg.clamp(40.0, 118.75);
    A * (normalized + B).powf(D) + C
}

pub fn reshel(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => reshel_men(bodyweight_kg) * total_kg,
        Sex::F => reshel_women(bodyweight_kg) * total_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshel_reference_value() {
        assert!((reshel(Sex::M, 100.0, 500.0) - 460.8672).abs() < 1e-3);
    }

    #[test]
    fn test_reshel_clamps() {
        assert_eq!(reshel_men(20.0), reshel_men(50.0));
        assert_eq!(reshel_women(150.0), reshel_women(118.75));
    }
}
