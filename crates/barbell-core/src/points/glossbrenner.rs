//! Glossbrenner points: the average of Schwartz/Malone and Wilks, with a
//! fitted linear section at heavy bodyweights. Mostly used by GPC affiliates.

use crate::entry::Sex;
use crate::points::schwartz_malone::{malone_coefficient, schwartz_coefficient};
use crate::points::wilks::{wilks_men, wilks_women};

fn glossbrenner_men(bodyweight_kg: f64) -> f64 {
    if bodyweight_kg < 153.05 {
        (schwartz_coefficient(bodyweight_kg) + wilks_men(bodyweight_kg)) / 2.0
    } else {
        const A: f64 = -0.000821668402557;
        const B: f64 = 0.676940740094416;
        (schwartz_coefficient(bodyweight_kg) + A * bodyweight_kg + B) / 2.0
    }
}

fn glossbrenner_women(bodyweight_kg: f64) -> f64 {
    if bodyweight_kg < 106.3 {
        (malone_coefficient(bodyweight_kg) + wilks_women(bodyweight_kg)) / 2.0
    } else {
        const A: f64 = -0.000313738002024;
        const B: f64 = 0.852664892884785;
        (malone_coefficient(bodyweight_kg) + A * bodyweight_kg + B) / 2.0
    }
}

pub fn glossbrenner(sex: Sex, bodyweight_kg: f64, total_kg: f64) -> f64 {
    match sex {
        Sex::M | Sex::Mx => glossbrenner_men(bodyweight_kg) * total_kg,
        Sex::F => glossbrenner_women(bodyweight_kg) * total_kg,
    }
}
