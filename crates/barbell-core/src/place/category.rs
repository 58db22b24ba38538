use serde::{Deserialize, Serialize};

use crate::entry::{Entry, Equipment, Event, ResultsMode, Sex, WeightClass};

/// Which equipment categories are ranked together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentMergePolicy {
    /// Rank Sleeves lifters in the Wraps category.
    pub combine_sleeves_and_wraps: bool,
    /// Rank Single-ply lifters in the Multi-ply category (points rankings only).
    pub combine_single_and_multi: bool,
}

impl EquipmentMergePolicy {
    /// Equipment an entry is bucketed under for division placement.
    pub fn for_division(&self, equipment: Equipment) -> Equipment {
        match equipment {
            Equipment::Sleeves if self.combine_sleeves_and_wraps => Equipment::Wraps,
            other => other,
        }
    }

    /// Equipment an entry is bucketed under for points rankings.
    pub fn for_points(&self, equipment: Equipment) -> Equipment {
        match self.for_division(equipment) {
            Equipment::SinglePly if self.combine_single_and_multi => Equipment::MultiPly,
            other => other,
        }
    }
}

/// A competition category. Derived ordering is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub sex: Sex,
    pub event: Event,
    pub equipment: Equipment,
    /// Empty when the entry declared no divisions.
    pub division: String,
    pub weight_class: WeightClass,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.sex, self.weight_class, self.equipment)?;
        if !self.division.is_empty() {
            write!(f, " {}", self.division)?;
        }
        write!(f, " {}", self.event)
    }
}

/// Final placing of one entry in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Place {
    Ranked(u32),
    /// No total in the category's event.
    Dq,
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ranked(place) => write!(f, "{}", place),
            Self::Dq => write!(f, "DQ"),
        }
    }
}

/// A category and its entries in rank order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults<'a> {
    pub category: Category,
    /// Totals the entries were ranked by.
    pub mode: ResultsMode,
    pub ordered_entries: Vec<&'a Entry>,
}

impl<'a> CategoryResults<'a> {
    /// Place of each entry, parallel to `ordered_entries`.
    ///
    /// Entries without a total in the event, under the category's results
    /// mode, are disqualified.
    pub fn places(&self) -> Vec<Place> {
        self.ordered_entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if self.total_of(entry) == 0.0 {
                    Place::Dq
                } else {
                    Place::Ranked(index as u32 + 1)
                }
            })
            .collect()
    }

    /// Event total of `entry` under the category's results mode.
    pub fn total_of(&self, entry: &Entry) -> f64 {
        entry.event_total(self.category.event, self.mode)
    }

    pub fn place_of(&self, id: u32) -> Option<Place> {
        let index = self.ordered_entries.iter().position(|e| e.id == id)?;
        self.places().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(sex: Sex, event: Event, equipment: Equipment, division: &str, class: WeightClass) -> Category {
        Category {
            sex,
            event,
            equipment,
            division: division.to_string(),
            weight_class: class,
        }
    }

    #[test]
    fn test_merge_policy() {
        let none = EquipmentMergePolicy::default();
        assert_eq!(none.for_division(Equipment::Sleeves), Equipment::Sleeves);

        let both = EquipmentMergePolicy {
            combine_sleeves_and_wraps: true,
            combine_single_and_multi: true,
        };
        assert_eq!(both.for_division(Equipment::Sleeves), Equipment::Wraps);
        assert_eq!(both.for_division(Equipment::SinglePly), Equipment::SinglePly);
        assert_eq!(both.for_points(Equipment::SinglePly), Equipment::MultiPly);
        assert_eq!(both.for_points(Equipment::Sleeves), Equipment::Wraps);
    }

    #[test]
    fn test_presentation_order() {
        let mut categories = vec![
            category(Sex::M, Event::Sbd, Equipment::Sleeves, "Open", WeightClass::Over(12000)),
            category(Sex::M, Event::Sbd, Equipment::Sleeves, "Open", WeightClass::UpTo(9300)),
            category(Sex::M, Event::B, Equipment::Sleeves, "Open", WeightClass::UpTo(5900)),
            category(Sex::M, Event::Sbd, Equipment::Bare, "Open", WeightClass::UpTo(12000)),
            category(Sex::M, Event::Sbd, Equipment::Sleeves, "Juniors", WeightClass::UpTo(12000)),
            category(Sex::F, Event::D, Equipment::Unlimited, "", WeightClass::UpTo(8400)),
        ];
        categories.sort();

        let order: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            order,
            vec![
                "F 84 Unlimited D",
                "M 120 Bare Open SBD",
                "M 120 Sleeves Juniors SBD",
                "M 93 Sleeves Open SBD",
                "M 120+ Sleeves Open SBD",
                "M 59 Sleeves Open B",
            ]
        );
    }

    #[test]
    fn test_place_display() {
        assert_eq!(Place::Ranked(2).to_string(), "2");
        assert_eq!(Place::Dq.to_string(), "DQ");
    }
}
