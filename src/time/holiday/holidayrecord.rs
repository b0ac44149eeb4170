use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::time::utility::same_day_of_year;

/// A public holiday as delivered by a holiday source.
///
/// `not_statutory` and `half_day` are carried for display only; they do not
/// change whether the day counts as a business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    date: NaiveDate,
    name: String,
    #[serde(default)]
    not_statutory: bool,
    #[serde(default)]
    half_day: bool
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> HolidayRecord {
        HolidayRecord::with_flags(date, name, false, false)
    }

    pub fn with_flags(date: NaiveDate,
                      name: impl Into<String>,
                      not_statutory: bool,
                      half_day: bool) -> HolidayRecord {
        HolidayRecord {
            date,
            name: name.into(),
            not_statutory,
            half_day
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn not_statutory(&self) -> bool {
        self.not_statutory
    }

    pub fn half_day(&self) -> bool {
        self.half_day
    }

    /// Month and day match; the year of either date is ignored.
    #[inline]
    pub fn falls_on(&self, d: NaiveDate) -> bool {
        same_day_of_year(self.date, d)
    }
}

impl From<(NaiveDate, String)> for HolidayRecord {
    fn from((date, name): (NaiveDate, String)) -> HolidayRecord {
        HolidayRecord::new(date, name)
    }
}
