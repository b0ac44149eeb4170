use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::manager::managererror::CalendarError;
use crate::time::holiday::holidayrecord::HolidayRecord;
use crate::time::holiday::holidaysource::HolidaySource;

/// Memoises a `HolidaySource` per year.
///
/// Only successful lookups are stored; an error is returned to the caller and
/// the next request for that year asks the source again.
///
/// Two threads missing the same year at once may both query the source. The
/// second insert overwrites the first with an equal answer.
pub struct HolidayCache<S> {
    source: S,
    years: RwLock<HashMap<i32, Arc<[HolidayRecord]>>>
}

impl<S> HolidayCache<S>
where
    S: HolidaySource
{
    pub fn new(source: S) -> HolidayCache<S> {
        HolidayCache {
            source,
            years: RwLock::new(HashMap::new())
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_or_fetch(&self, year: i32) -> Result<Arc<[HolidayRecord]>, CalendarError> {
        if let Some(cached) = self.years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year) {
            return Ok(Arc::clone(cached));
        }

        let fetched: Arc<[HolidayRecord]> = match self.source.holidays_for(year) {
            Ok(records) => records.into(),
            Err(error) => {
                warn!(year, %error, "holiday lookup failed");
                return Err(error);
            }
        };
        debug!(year, count = fetched.len(), "memoised holidays");
        self.years
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, Arc::clone(&fetched));
        Ok(fetched)
    }
}
