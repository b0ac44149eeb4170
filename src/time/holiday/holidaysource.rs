use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::manager::managererror::CalendarError;
use crate::time::holiday::holidayrecord::HolidayRecord;

/// Supplies the public holidays of one territory, one year at a time.
///
/// Records come back in the order the source lists them. They are not
/// validated: a record may carry a different year than requested, and
/// duplicates are passed through as is.
pub trait HolidaySource: Send + Sync {
    fn holidays_for(&self, year: i32) -> Result<Vec<HolidayRecord>, CalendarError>;
}

impl<S> HolidaySource for Arc<S>
where
    S: HolidaySource + ?Sized
{
    fn holidays_for(&self, year: i32) -> Result<Vec<HolidayRecord>, CalendarError> {
        (**self).holidays_for(year)
    }
}

type HolidayLookup = dyn Fn(i32) -> Result<Vec<(NaiveDate, String)>, CalendarError> + Send + Sync;

/// Adapts a `(date, name)` lookup function into a `HolidaySource`.
pub struct FnHolidaySource {
    country: String,
    lookup: Box<HolidayLookup>
}

impl FnHolidaySource {
    pub fn new<F>(country: impl Into<String>, lookup: F) -> FnHolidaySource
    where
        F: Fn(i32) -> Result<Vec<(NaiveDate, String)>, CalendarError> + Send + Sync + 'static
    {
        FnHolidaySource {
            country: country.into(),
            lookup: Box::new(lookup)
        }
    }
}

impl HolidaySource for FnHolidaySource {
    fn holidays_for(&self, year: i32) -> Result<Vec<HolidayRecord>, CalendarError> {
        let raw = (self.lookup)(year)?;
        debug!(country = %self.country, year, count = raw.len(), "looked up holidays");
        Ok(raw.into_iter().map(HolidayRecord::from).collect())
    }
}
