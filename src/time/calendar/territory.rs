use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::manager::managererror::CalendarError;

const DEFAULT_WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri
];

/// Workdays as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayMask(u8);

impl WorkdayMask {
    pub fn new(workdays: &[Weekday]) -> WorkdayMask {
        let mut mask = 0u8;
        for &weekday in workdays {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WorkdayMask(mask)
    }

    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

/// Full English weekday name, e.g. `"Monday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday"
    }
}

/// Jurisdiction metadata plus its working week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    country: String,
    name: String,
    timezone: String,
    workdays: Vec<Weekday>,
    mask: WorkdayMask
}

impl Territory {
    /// A territory working Monday to Friday.
    pub fn new(country: impl Into<String>,
               name: impl Into<String>,
               timezone: impl Into<String>) -> Territory {
        let workdays = Territory::default_workdays();
        Territory {
            country: country.into(),
            name: name.into(),
            timezone: timezone.into(),
            mask: WorkdayMask::new(&workdays),
            workdays
        }
    }

    pub fn default_workdays() -> Vec<Weekday> {
        DEFAULT_WORKDAYS.to_vec()
    }

    /// Replaces the working week. Repeated days are dropped, first-seen order is kept.
    pub fn with_workdays<I>(mut self, workdays: I) -> Territory
    where
        I: IntoIterator<Item = Weekday>
    {
        let mut unique: Vec<Weekday> = Vec::with_capacity(7);
        for weekday in workdays {
            if !unique.contains(&weekday) {
                unique.push(weekday);
            }
        }
        self.mask = WorkdayMask::new(&unique);
        self.workdays = unique;
        self
    }

    /// Same as `with_workdays`, taking names such as `"Monday"` or `"sun"`.
    pub fn with_workday_names<I, T>(self, names: I) -> Result<Territory, CalendarError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>
    {
        let workdays = names.into_iter()
            .map(|name| {
                let name = name.as_ref();
                name.trim()
                    .parse::<Weekday>()
                    .map_err(|_| CalendarError::malformed(format!("'{}' is not a weekday name", name)))
            })
            .collect::<Result<Vec<Weekday>, CalendarError>>()?;
        Ok(self.with_workdays(workdays))
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Informational only; evaluation works on plain calendar dates.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn workdays(&self) -> &[Weekday] {
        &self.workdays
    }

    pub fn workday_names(&self) -> Vec<&'static str> {
        self.workdays.iter().map(|&w| weekday_name(w)).collect()
    }

    #[inline]
    pub fn is_workday(&self, d: NaiveDate) -> bool {
        self.mask.contains(d.weekday())
    }
}
