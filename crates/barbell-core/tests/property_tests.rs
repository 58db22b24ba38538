//! Property tests for formulas, plate loading and placement ordering.

use barbell_core::barload::loaded_weight;
use barbell_core::config::plates::{BAR_AND_COLLARS_KG, INVENTORY, default_plates};
use barbell_core::place::sort_by_place;
use barbell_core::{
    Entry, Equipment, Event, Formula, Lift, LiftStatus, ResultsMode, Sex, WeightUnit,
    make_relative, select_plates,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::F), Just(Sex::M), Just(Sex::Mx)]
}

fn any_equipment() -> impl Strategy<Value = Equipment> {
    proptest::sample::select(Equipment::iter().collect::<Vec<_>>())
}

fn any_event() -> impl Strategy<Value = Event> {
    proptest::sample::select(Event::iter().collect::<Vec<_>>())
}

/// Per-side plate counts drawn from the default inventory.
fn reachable_counts() -> impl Strategy<Value = Vec<u32>> {
    INVENTORY
        .iter()
        .map(|&(_, pairs, _)| 0..=pairs)
        .collect::<Vec<_>>()
}

fn weight_of(counts: &[u32]) -> f64 {
    let per_side: f64 = INVENTORY
        .iter()
        .zip(counts)
        .map(|(&(weight, _, _), &count)| weight * count as f64)
        .sum();
    BAR_AND_COLLARS_KG + 2.0 * per_side
}

proptest! {
    #[test]
    fn formulas_are_finite_and_non_negative(
        sex in any_sex(),
        equipment in any_equipment(),
        event in any_event(),
        bodyweight in 20.0f64..250.0,
        total in 0.5f64..1500.0,
    ) {
        for formula in Formula::iter() {
            let points = formula.evaluate(sex, equipment, event, bodyweight, total);
            prop_assert!(points.is_finite(), "{} gave {}", formula, points);
            prop_assert!(points >= 0.0, "{} gave {}", formula, points);
        }
    }

    #[test]
    fn zero_total_scores_zero(
        sex in any_sex(),
        equipment in any_equipment(),
        event in any_event(),
        bodyweight in 0.0f64..300.0,
    ) {
        for formula in Formula::iter() {
            prop_assert_eq!(formula.evaluate(sex, equipment, event, bodyweight, 0.0), 0.0);
        }
    }

    #[test]
    fn reachable_weights_round_trip(counts in reachable_counts()) {
        let target = weight_of(&counts);
        let loading = select_plates(target, BAR_AND_COLLARS_KG, &default_plates(), WeightUnit::Kg);

        let loaded = loaded_weight(&loading, BAR_AND_COLLARS_KG);
        prop_assert!(loaded.is_some());
        prop_assert!((loaded.unwrap_or_default() - target).abs() < 1e-6);
    }

    #[test]
    fn unreachable_weights_end_in_one_remainder(counts in reachable_counts()) {
        let target = weight_of(&counts) + 0.1;
        let loading = select_plates(target, BAR_AND_COLLARS_KG, &default_plates(), WeightUnit::Kg);

        let remainders = loading.iter().filter(|p| p.is_remainder()).count();
        prop_assert_eq!(remainders, 1);
        prop_assert!(loading.last().is_some_and(|p| p.is_remainder()));

        let plates: f64 = loading
            .iter()
            .filter(|p| !p.is_remainder())
            .map(|p| p.weight)
            .sum();
        prop_assert!(BAR_AND_COLLARS_KG + 2.0 * plates < target);
    }

    #[test]
    fn identical_loadings_are_fully_loaded(counts in reachable_counts()) {
        let target = weight_of(&counts);
        let previous = select_plates(target, BAR_AND_COLLARS_KG, &default_plates(), WeightUnit::Kg);
        let mut loading = previous.clone();

        make_relative(&mut loading, &previous);
        prop_assert!(loading.iter().all(|p| p.is_already_loaded));
    }

    #[test]
    fn placement_ignores_input_order(
        lifters in proptest::collection::vec(
            (
                proptest::sample::select(vec![100.0, 110.0, 120.0]),
                proptest::sample::select(vec![100.0, 110.0, 120.0]),
                any::<bool>(),
                proptest::sample::select(vec![74.0, 83.0]),
                any::<bool>(),
            ),
            1..12,
        ),
        with_lots in any::<bool>(),
    ) {
        let entries: Vec<Entry> = lifters
            .iter()
            .enumerate()
            .map(|(index, &(opener, second, made_second, bodyweight, guest))| {
                let id = index as u32 + 1;
                let mut entry = Entry::new(id);
                entry.name = format!("Lifter {:02}", id);
                entry.bodyweight_kg = bodyweight;
                entry.guest = guest;
                entry.events = vec![Event::B];
                entry.lot = if with_lots { id } else { 0 };
                entry.set_attempt(Lift::B, 1, opener, LiftStatus::Successful);
                let status = if made_second {
                    LiftStatus::Successful
                } else {
                    LiftStatus::Failed
                };
                entry.set_attempt(Lift::B, 2, second, status);
                entry
            })
            .collect();

        let mut forward: Vec<&Entry> = entries.iter().collect();
        let mut backward: Vec<&Entry> = entries.iter().rev().collect();
        sort_by_place(&mut forward, Event::B, ResultsMode::Final);
        sort_by_place(&mut backward, Event::B, ResultsMode::Final);

        let forward_ids: Vec<u32> = forward.iter().map(|e| e.id).collect();
        let backward_ids: Vec<u32> = backward.iter().map(|e| e.id).collect();
        prop_assert_eq!(forward_ids, backward_ids);
    }
}
