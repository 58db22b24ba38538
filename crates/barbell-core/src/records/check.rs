use tracing::{debug, info};

use crate::config::MeetConfig;
use crate::entry::{Entry, Lift, WeightClassConfig};
use crate::records::{LiftingRecord, RecordBook, RecordKey, RecordLift, RecordType};

/// Best counted weight an entry holds toward a record.
pub fn record_weight(entry: &Entry, lift: RecordLift) -> f64 {
    match lift {
        RecordLift::S => entry.best3(Lift::S),
        RecordLift::B => entry.best3(Lift::B),
        RecordLift::D => entry.best3(Lift::D),
        RecordLift::Total => entry.final_total(),
    }
}

/// Weight a record would stand at if the attempt is made.
///
/// A total record is only attempted on the deadlift: best squat plus best
/// bench plus the deadlift attempt.
pub fn attempt_record_weight(entry: &Entry, lift: RecordLift, attempt: usize) -> f64 {
    match lift {
        RecordLift::S => entry.weight(Lift::S, attempt),
        RecordLift::B => entry.weight(Lift::B, attempt),
        RecordLift::D => entry.weight(Lift::D, attempt),
        RecordLift::Total => {
            entry.best3(Lift::S) + entry.best3(Lift::B) + entry.weight(Lift::D, attempt)
        }
    }
}

/// A full-power lifter who bombed an earlier lift can't set a later record.
fn bombed_before(entry: &Entry, lift: RecordLift) -> bool {
    let squat_bombed = lift != RecordLift::S && entry.best3(Lift::S) == 0.0;
    let bench_bombed =
        matches!(lift, RecordLift::D | RecordLift::Total) && entry.best3(Lift::B) == 0.0;
    squat_bombed || bench_bombed
}

/// Whether the declared attempt would beat the record in the entry's category.
///
/// Eligibility to set records is not considered here, so the table can still
/// announce unofficial attempts.
pub fn is_record_attempt(
    book: &RecordBook,
    classes: &WeightClassConfig,
    entry: &Entry,
    lift: RecordLift,
    attempt: usize,
) -> bool {
    let Some(key) = RecordKey::for_entry(entry, classes, lift) else {
        return false;
    };
    let weight = attempt_record_weight(entry, lift, attempt);
    if weight <= 0.0 || !book.would_break(&key, weight) {
        return false;
    }
    !(key.record_type == RecordType::FullPower && bombed_before(entry, lift))
}

/// Like [`is_record_attempt`], but also requires the entry to be eligible
/// and nobody else in the same record category to have already made the
/// same weight or more at this meet.
pub fn is_official_record_attempt(
    book: &RecordBook,
    classes: &WeightClassConfig,
    entries: &[Entry],
    entry: &Entry,
    lift: RecordLift,
    attempt: usize,
) -> bool {
    if !entry.can_break_records || !is_record_attempt(book, classes, entry, lift, attempt) {
        return false;
    }
    let Some(key) = RecordKey::for_entry(entry, classes, lift) else {
        return false;
    };
    let weight = attempt_record_weight(entry, lift, attempt);

    !entries
        .iter()
        .filter(|other| other.id != entry.id)
        .filter(|other| RecordKey::for_entry(other, classes, lift).as_ref() == Some(&key))
        .any(|other| record_weight(other, lift) >= weight)
}

/// Record lifts the pending attempt in `lift` is going for.
///
/// A deadlift attempt can also be a total attempt for a full-power lifter.
pub fn record_attempt_lifts(
    book: &RecordBook,
    classes: &WeightClassConfig,
    entry: &Entry,
    lift: Lift,
    attempt: usize,
) -> Vec<RecordLift> {
    if !entry.is_pending(lift, attempt) {
        return Vec::new();
    }
    let mut lifts = vec![RecordLift::from(lift)];
    if lift == Lift::D && RecordType::for_entry(entry) == RecordType::FullPower {
        lifts.push(RecordLift::Total);
    }
    lifts.retain(|&record_lift| is_record_attempt(book, classes, entry, record_lift, attempt));
    lifts
}

/// Records an entry currently holds enough weight to claim.
///
/// Full-power lifters need a total to claim anything. Only lifts in the
/// entry's first event count, with total records for full power only.
pub fn candidate_records(entry: &Entry, config: &MeetConfig) -> Vec<LiftingRecord> {
    let record_type = RecordType::for_entry(entry);
    if !entry.can_break_records
        || (record_type == RecordType::FullPower && entry.final_total() <= 0.0)
    {
        return Vec::new();
    }
    let Some(event) = entry.events.first() else {
        return Vec::new();
    };

    let mut lifts: Vec<RecordLift> = event.lifts().iter().copied().map(RecordLift::from).collect();
    if record_type == RecordType::FullPower {
        lifts.push(RecordLift::Total);
    }

    lifts
        .into_iter()
        .filter_map(|lift| {
            let key = RecordKey::for_entry(entry, &config.weight_classes, lift)?;
            let weight_kg = record_weight(entry, lift);
            (weight_kg > 0.0).then(|| LiftingRecord {
                division: key.division,
                sex: key.sex,
                weight_class: key.weight_class,
                equipment: key.equipment,
                record_type: key.record_type,
                lift,
                weight_kg,
                full_name: entry.name.clone(),
                date: config.date,
                location: config.name.clone(),
            })
        })
        .collect()
}

/// Write every record broken at this meet into `book`.
///
/// Entries are considered in order, so on equal weights the earlier entry
/// keeps the record. Returns the records that were set.
pub fn confirm_records(book: &mut RecordBook, config: &MeetConfig, entries: &[Entry]) -> Vec<LiftingRecord> {
    let mut set = Vec::new();
    for entry in entries {
        for record in candidate_records(entry, config) {
            if book.would_break(&record.key(), record.weight_kg) {
                debug!("{} sets {} at {}", entry.name, record.key(), record.weight_kg);
                book.upsert(record.clone());
                set.push(record);
            }
        }
    }
    info!("Confirmed {} records from {} entries", set.len(), entries.len());
    set
}

/// The record book as it would stand if the meet ended now.
pub fn updated_records(book: &RecordBook, config: &MeetConfig, entries: &[Entry]) -> RecordBook {
    let mut updated = book.clone();
    confirm_records(&mut updated, config, entries);
    updated
}
