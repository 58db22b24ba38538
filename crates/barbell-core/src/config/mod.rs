//! Meet configuration and engine constants.
//!
//! This module contains:
//! - `MeetConfig` - per-meet settings (classes, formula, unit, bar weights, plates)
//! - `Meet` - a full snapshot of configuration, entries and lifting state
//! - Attempt, weight class and plate inventory constants

mod meet;

pub use meet::*;

/// Attempt slots per lift.
pub mod attempts {
    /// Maximum attempts recorded per lift. Only the first three count toward
    /// the total; the fourth and fifth are federation record attempts.
    pub const MAX_ATTEMPTS: usize = 5;
}

/// Default weight class boundaries (IPF), in kilograms.
pub mod weight_classes {
    pub const MEN_KG: [f64; 7] = [59.0, 66.0, 74.0, 83.0, 93.0, 105.0, 120.0];
    pub const WOMEN_KG: [f64; 7] = [47.0, 52.0, 57.0, 63.0, 69.0, 76.0, 84.0];
    pub const MX_KG: [f64; 7] = MEN_KG;
}

/// Default bar and plate inventory.
pub mod plates {
    use crate::barload::{Plate, PlateColor};

    /// Standard 20kg bar with a pair of 2.5kg competition collars.
    pub const BAR_AND_COLLARS_KG: f64 = 25.0;

    /// Calibrated plate set: (weight in kg, pairs available, color).
    pub const INVENTORY: [(f64, u32, PlateColor); 9] = [
        (25.0, 8, PlateColor::RED),
        (20.0, 1, PlateColor::BLUE),
        (15.0, 1, PlateColor::YELLOW),
        (10.0, 1, PlateColor::GREEN),
        (5.0, 1, PlateColor::WHITE),
        (2.5, 1, PlateColor::BLACK),
        (1.25, 1, PlateColor::GRAY),
        (0.5, 1, PlateColor::GREEN),
        (0.25, 1, PlateColor::BLUE),
    ];

    pub fn default_plates() -> Vec<Plate> {
        INVENTORY
            .iter()
            .map(|&(weight_kg, pair_count, color)| Plate::new(weight_kg, pair_count, color))
            .collect()
    }
}
