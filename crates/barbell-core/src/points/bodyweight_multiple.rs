/// Total expressed as a multiple of bodyweight.
pub fn bodyweight_multiple(bodyweight_kg: f64, total_kg: f64) -> f64 {
    if bodyweight_kg <= 0.0 || total_kg <= 0.0 {
        return 0.0;
    }
    total_kg / bodyweight_kg
}
