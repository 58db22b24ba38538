//! Foster-McCulloch age coefficients.
//!
//! Ages 5-13 and 91+ are extrapolated guesses. Ages 1-4 score zero.

/// Coefficient for each age, indexed by age in years.
#[rustfmt::skip]
const AGE_COEFFICIENTS: [f64; 101] = [
    // 0-4
    0.0, 0.0, 0.0, 0.0, 0.0,
    // 5-13
    1.73, 1.67, 1.61, 1.55, 1.49, 1.43, 1.38, 1.33, 1.28,
    // 14-22 (Foster)
    1.23, 1.18, 1.13, 1.08, 1.06, 1.04, 1.03, 1.02, 1.01,
    // 23-40
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    // 41-80 (McCulloch, corrected against the Glossbrenner masters table)
    1.01, 1.02, 1.031, 1.043, 1.055, 1.068, 1.082, 1.097, 1.113, 1.13,
    1.147, 1.165, 1.184, 1.204, 1.225, 1.246, 1.268, 1.291, 1.315, 1.34,
    1.366, 1.393, 1.421, 1.45, 1.48, 1.511, 1.543, 1.576, 1.61, 1.645,
    1.681, 1.718, 1.756, 1.795, 1.835, 1.876, 1.918, 1.961, 2.005, 2.05,
    // 81-90 (USAPL)
    2.096, 2.143, 2.19, 2.238, 2.287, 2.337, 2.388, 2.44, 2.494, 2.549,
    // 91-100
    2.605, 2.662, 2.72, 2.779, 2.839, 2.9, 2.962, 3.025, 3.089, 3.154,
];

/// Age multiplier; unknown or out-of-table ages are neutral.
pub fn foster_mcculloch(age: u32) -> f64 {
    if age == 0 {
        return 1.0;
    }
    AGE_COEFFICIENTS.get(age as usize).copied().unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_boundaries() {
        assert_eq!(foster_mcculloch(0), 1.0);
        assert_eq!(foster_mcculloch(3), 0.0);
        assert_eq!(foster_mcculloch(5), 1.73);
        assert_eq!(foster_mcculloch(15), 1.18);
        assert_eq!(foster_mcculloch(30), 1.0);
        assert_eq!(foster_mcculloch(41), 1.01);
        assert_eq!(foster_mcculloch(80), 2.05);
        assert_eq!(foster_mcculloch(100), 3.154);
        assert_eq!(foster_mcculloch(101), 1.0);
    }
}
