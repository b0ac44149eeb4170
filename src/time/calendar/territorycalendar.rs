use std::sync::Arc;

use chrono::{
    Datelike,
    Local,
    NaiveDate,
    Weekday
};
use tracing::debug;

use crate::manager::managererror::CalendarError;
use crate::time::calendar::territory::Territory;
use crate::time::holiday::holidaycache::HolidayCache;
use crate::time::holiday::holidayrecord::HolidayRecord;
use crate::time::holiday::holidaysource::HolidaySource;

/// Workdays and public holidays of one territory for one year.
///
/// The holiday list is fixed at construction. Other years can still be
/// requested through `holidays_for`, which asks the same source and
/// remembers the answer, so a calendar can be shared read-only between
/// threads.
#[derive(Clone)]
pub struct TerritoryCalendar {
    territory: Territory,
    year: i32,
    holidays: Arc<[HolidayRecord]>,
    source: Arc<HolidayCache<Arc<dyn HolidaySource>>>
}

impl TerritoryCalendar {
    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn country(&self) -> &str {
        self.territory.country()
    }

    pub fn name(&self) -> &str {
        self.territory.name()
    }

    pub fn timezone(&self) -> &str {
        self.territory.timezone()
    }

    pub fn workdays(&self) -> &[Weekday] {
        self.territory.workdays()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    /// First holiday record sharing `d`'s month and day.
    pub fn holiday_on(&self, d: NaiveDate) -> Option<&HolidayRecord> {
        self.holidays.iter().find(|h| h.falls_on(d))
    }

    /// Holidays of `year`: the loaded list for the calendar's own year,
    /// otherwise a memoised lookup on the source.
    pub fn holidays_for(&self, year: i32) -> Result<Arc<[HolidayRecord]>, CalendarError> {
        if year == self.year {
            Ok(Arc::clone(&self.holidays))
        } else {
            self.source.get_or_fetch(year)
                .map_err(|error| into_data_unavailable(error, self.country(), year))
        }
    }
}

pub fn build_calendar(territory: Territory,
                      source: Arc<dyn HolidaySource>,
                      year: i32) -> Result<TerritoryCalendar, CalendarError> {
    let source = Arc::new(HolidayCache::new(source));
    let holidays = source.get_or_fetch(year)
        .map_err(|error| into_data_unavailable(error, territory.country(), year))?;
    debug!(country = territory.country(),
           year,
           holidays = holidays.len(),
           "built territory calendar");
    Ok(TerritoryCalendar {
        territory,
        year,
        holidays,
        source
    })
}

pub fn build_calendar_for_current_year(territory: Territory,
                                       source: Arc<dyn HolidaySource>) -> Result<TerritoryCalendar, CalendarError> {
    build_calendar(territory, source, current_year())
}

pub fn current_year() -> i32 {
    Local::now().year()
}

// Any failure of the source is reported to callers as missing data for that year.
fn into_data_unavailable(error: CalendarError, country: &str, year: i32) -> CalendarError {
    match error {
        CalendarError::DataUnavailable { .. } => error,
        other => CalendarError::data_unavailable(country, year, other.to_string())
    }
}
