use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{trace, warn};

use crate::manager::managererror::CalendarError;
use crate::time::calendar::territorycalendar::TerritoryCalendar;
use crate::time::holiday::holidayrecord::HolidayRecord;
use crate::time::utility::{check_month, days_of_month};

/// Upper bound on days examined by `next_business_day`.
pub const SCAN_LIMIT: u32 = 366;

/// `d` is a workday of the territory and no loaded holiday shares its month and day.
///
/// Holiday flags are ignored: a half-day or non-statutory holiday still
/// removes the day.
pub fn is_business_day(d: NaiveDate, calendar: &TerritoryCalendar) -> bool {
    calendar.territory().is_workday(d) && calendar.holiday_on(d).is_none()
}

/// Returns `d` itself when it is a business day, otherwise the first business
/// day after it.
///
/// Every step applies the loaded holidays, so the result always passes
/// `is_business_day`. Once the scan crosses into a new year, that year's
/// holidays are requested from the calendar's source and exclude days too;
/// if the source has none, the scan stops with `DataUnavailable` rather than
/// guessing.
pub fn next_business_day(d: NaiveDate, calendar: &TerritoryCalendar) -> Result<NaiveDate, CalendarError> {
    if is_business_day(d, calendar) {
        return Ok(d);
    }

    let mut scan_year = d.year();
    let mut crossed: Option<Arc<[HolidayRecord]>> = None;
    let mut current = d;
    for _ in 0..SCAN_LIMIT {
        current = current.succ_opt()
            .ok_or_else(|| CalendarError::malformed(format!("no date follows {}", current)))?;
        if current.year() != scan_year {
            scan_year = current.year();
            crossed = Some(calendar.holidays_for(scan_year)?);
        }
        let off_in_crossed_year = crossed.as_deref()
            .is_some_and(|holidays| holidays.iter().any(|h| h.falls_on(current)));
        if is_business_day(current, calendar) && !off_in_crossed_year {
            trace!(from = %d, to = %current, "found next business day");
            return Ok(current);
        }
        trace!(date = %current, "skipping non-business day");
    }

    warn!(start = %d, country = calendar.country(), "business day scan limit reached");
    Err(CalendarError::ScanLimitExceeded { start: d, limit: SCAN_LIMIT })
}

/// Business days of one month, in date order.
pub fn business_days_in_month(year: i32,
                              month: u32,
                              calendar: &TerritoryCalendar) -> Result<Vec<NaiveDate>, CalendarError> {
    let month = check_month(month)?;
    Ok((1..=days_of_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|&d| is_business_day(d, calendar))
        .collect())
}

pub fn business_days_in_months(year: i32,
                               months: &[u32],
                               calendar: &TerritoryCalendar) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut days = Vec::new();
    for &month in months {
        days.extend(business_days_in_month(year, month, calendar)?);
    }
    Ok(days)
}

/// The 1st of the month if it is a business day, otherwise the next one.
pub fn first_business_day_of_month(year: i32,
                                   month: u32,
                                   calendar: &TerritoryCalendar) -> Result<NaiveDate, CalendarError> {
    let month = check_month(month)?;
    let fom = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::malformed(format!("{}-{:02} is out of range", year, month)))?;
    next_business_day(fom, calendar)
}
