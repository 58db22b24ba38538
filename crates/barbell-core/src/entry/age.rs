use chrono::{Datelike, Days, NaiveDate};

use crate::entry::Entry;

impl Entry {
    /// Age in whole years on the entry's competition day.
    ///
    /// An explicit `age` wins. Otherwise the age is inferred from the birth
    /// date, advancing the meet date to the entry's day of a multi-day meet.
    /// Returns 0 when the age can't be determined.
    pub fn age_at_meet(&self, meet_date: Option<NaiveDate>) -> u32 {
        if self.age > 0 {
            return self.age;
        }

        let (Some(birth), Some(meet)) = (self.birth_date, meet_date) else {
            return 0;
        };

        let offset = u64::from(self.day.saturating_sub(1));
        let lifting_day = meet.checked_add_days(Days::new(offset)).unwrap_or(meet);

        let years = lifting_day.year() - birth.year();
        if years <= 0 {
            return 0;
        }

        let had_birthday = (birth.month(), birth.day()) <= (lifting_day.month(), lifting_day.day());
        let age = if had_birthday { years } else { years - 1 };
        age.max(0) as u32
    }
}
