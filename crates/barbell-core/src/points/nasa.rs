//! NASA points. The published coefficient table is a straight line.

/// Minimum bodyweight for a non-zero score.
pub const MIN_BODYWEIGHT_KG: f64 = 30.0;

pub fn nasa_points(bodyweight_kg: f64, total_kg: f64) -> f64 {
    const M: f64 = 0.00620912;
    const B: f64 = 0.565697;

    if bodyweight_kg < MIN_BODYWEIGHT_KG {
        return 0.0;
    }
    (total_kg / bodyweight_kg) * (M * bodyweight_kg + B)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nasa_points() {
        assert!((nasa_points(100.0, 500.0) - 5.933045).abs() < 1e-9);
        assert_eq!(nasa_points(29.0, 500.0), 0.0);
    }
}
