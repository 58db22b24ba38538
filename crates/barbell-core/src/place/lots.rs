use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::entry::{Entry, Flight};

/// Draw random lot numbers, sequenced by flight.
///
/// Flight A receives the lowest lots, then flight B, and so on; within a
/// flight the order is shuffled. The result is parallel to `entries` and is a
/// permutation of `1..=entries.len()`.
pub fn random_lot_numbers<R: Rng + ?Sized>(entries: &[Entry], rng: &mut R) -> Vec<u32> {
    let mut flights: BTreeMap<Flight, Vec<usize>> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        flights.entry(entry.flight).or_default().push(index);
    }

    let mut lots = vec![0; entries.len()];
    let mut next_lot = 0;
    for indices in flights.values_mut() {
        indices.shuffle(rng);
        for &index in indices.iter() {
            next_lot += 1;
            lots[index] = next_lot;
        }
    }

    debug!("Drew {} lot numbers over {} flights", entries.len(), flights.len());
    lots
}

/// Overwrite every entry's lot with a fresh random draw.
pub fn assign_lot_numbers<R: Rng + ?Sized>(entries: &mut [Entry], rng: &mut R) {
    let lots = random_lot_numbers(entries, rng);
    for (entry, lot) in entries.iter_mut().zip(lots) {
        entry.lot = lot;
    }
}
