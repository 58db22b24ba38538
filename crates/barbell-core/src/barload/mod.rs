//! Bar loading.
//!
//! Greedy plate selection for one side of the bar, and marking which plates
//! of a loading are already on the bar from a previous loading.

mod plate;

pub use plate::*;

use tracing::debug;

use crate::units::{WeightUnit, kg_to_lbs, rounded};

/// Relative slack when comparing a plate against the remaining side weight.
const TOLERANCE: f64 = 1e-9;

/// Select plates for one side of the bar, heaviest first.
///
/// All inputs are kilograms. In a pounds meet every weight is converted and
/// rounded to its displayed value first, so the returned plate weights are in
/// `unit`. If the inventory can't reach the target, the last element is a
/// red plate carrying the negated per-side remainder.
pub fn select_plates(
    loading_kg: f64,
    bar_and_collars_kg: f64,
    plates: &[Plate],
    unit: WeightUnit,
) -> Vec<LoadedPlate> {
    let to_unit = |kg: f64| match unit {
        WeightUnit::Kg => kg,
        WeightUnit::Lbs => rounded(kg_to_lbs(kg)),
    };

    let mut sorted: Vec<Plate> = plates
        .iter()
        .map(|p| Plate::new(to_unit(p.weight_kg), p.pair_count, p.color))
        .collect();
    sorted.sort_by(|a, b| b.weight_kg.total_cmp(&a.weight_kg));

    let mut side = (to_unit(loading_kg) - to_unit(bar_and_collars_kg)) / 2.0;
    let mut loading = Vec::new();

    for plate in &sorted {
        let mut remaining = plate.pair_count;
        while remaining > 0 && fits(plate.weight_kg, side) {
            remaining -= 1;
            side -= plate.weight_kg;
            loading.push(LoadedPlate::new(plate.weight_kg, plate.color));
        }
    }

    if side > TOLERANCE * side.abs().max(1.0) {
        debug!("Unloadable remainder of {} {} per side", side, unit);
        loading.push(LoadedPlate::new(-side, PlateColor::RED));
    }

    loading
}

fn fits(weight: f64, side: f64) -> bool {
    weight > 0.0 && weight <= side + TOLERANCE * side.abs().max(1.0)
}

/// Mark plates in `loading` that are already on the bar in `previous`.
///
/// Both loadings are heaviest first. Matching walks `previous` with a cursor
/// that only moves forward, so repeated weights match in order.
pub fn make_relative(loading: &mut [LoadedPlate], previous: &[LoadedPlate]) {
    let mut cursor = 0;
    for plate in loading.iter_mut() {
        if let Some(offset) = previous[cursor..]
            .iter()
            .position(|p| p.weight == plate.weight)
        {
            cursor += offset + 1;
            plate.is_already_loaded = true;
        }
    }
}

/// Total weight of a loading on the bar, in the loading's unit.
///
/// Returns `None` when the loading ends in an unloadable remainder.
pub fn loaded_weight(loading: &[LoadedPlate], bar_and_collars: f64) -> Option<f64> {
    if loading.iter().any(LoadedPlate::is_remainder) {
        return None;
    }
    Some(bar_and_collars + 2.0 * loading.iter().map(|p| p.weight).sum::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plates::default_plates;

    fn weights(loading: &[LoadedPlate]) -> Vec<f64> {
        loading.iter().map(|p| p.weight).collect()
    }

    fn already_loaded(loading: &[LoadedPlate]) -> Vec<bool> {
        loading.iter().map(|p| p.is_already_loaded).collect()
    }

    #[test]
    fn test_empty_inventory_reports_remainder() {
        let loading = select_plates(500.0, 0.0, &[], WeightUnit::Kg);
        assert_eq!(loading.len(), 1);
        assert!(loading[0].weight < 0.0);
        assert_eq!(loading[0].color, PlateColor::RED);
    }

    #[test]
    fn test_empty_bar() {
        assert!(select_plates(25.0, 25.0, &default_plates(), WeightUnit::Kg).is_empty());
    }

    #[test]
    fn test_typical_loadings() {
        let plates = default_plates();
        assert_eq!(
            weights(&select_plates(172.5, 25.0, &plates, WeightUnit::Kg)),
            vec![25.0, 25.0, 20.0, 2.5, 1.25]
        );
        assert_eq!(
            weights(&select_plates(205.0, 25.0, &plates, WeightUnit::Kg)),
            vec![25.0, 25.0, 25.0, 15.0]
        );
    }

    #[test]
    fn test_pair_count_limits_plates() {
        let plates = [Plate::new(20.0, 1, PlateColor::BLUE)];
        let loading = select_plates(100.0, 20.0, &plates, WeightUnit::Kg);
        assert_eq!(weights(&loading), vec![20.0, -20.0]);
    }

    #[test]
    fn test_unsorted_inventory() {
        let plates = [
            Plate::new(5.0, 2, PlateColor::WHITE),
            Plate::new(25.0, 2, PlateColor::RED),
        ];
        let loading = select_plates(85.0, 25.0, &plates, WeightUnit::Kg);
        assert_eq!(weights(&loading), vec![25.0, 5.0]);
    }

    #[test]
    fn test_pounds_loading() {
        let plates = [
            Plate::new(20.41166, 8, PlateColor::BLUE),
            Plate::new(2.267962, 2, PlateColor::BLACK),
        ];
        // 45lb plates on a 45lb bar: 315lbs is three plates per side.
        let loading = select_plates(142.88, 20.41166, &plates, WeightUnit::Lbs);
        assert_eq!(weights(&loading), vec![45.0, 45.0, 45.0]);
    }

    #[test]
    fn test_make_relative_marks_previous_plates() {
        let plates = default_plates();
        let current = select_plates(175.0, 25.0, &plates, WeightUnit::Kg);
        assert_eq!(weights(&current), vec![25.0, 25.0, 25.0]);

        let mut next = select_plates(225.0, 25.0, &plates, WeightUnit::Kg);
        assert_eq!(already_loaded(&next), vec![false; 4]);

        make_relative(&mut next, &current);
        assert_eq!(already_loaded(&next), vec![true, true, true, false]);
    }

    #[test]
    fn test_make_relative_never_searches_backward() {
        let previous: Vec<LoadedPlate> = [25.0, 10.0]
            .iter()
            .map(|&w| LoadedPlate::new(w, PlateColor::RED))
            .collect();
        let mut loading: Vec<LoadedPlate> = [10.0, 25.0]
            .iter()
            .map(|&w| LoadedPlate::new(w, PlateColor::RED))
            .collect();

        make_relative(&mut loading, &previous);
        assert_eq!(already_loaded(&loading), vec![true, false]);
    }

    #[test]
    fn test_loaded_weight() {
        let loading = select_plates(172.5, 25.0, &default_plates(), WeightUnit::Kg);
        assert_eq!(loaded_weight(&loading, 25.0), Some(172.5));

        let short = select_plates(1000.0, 25.0, &default_plates(), WeightUnit::Kg);
        assert_eq!(loaded_weight(&short, 25.0), None);
    }
}
