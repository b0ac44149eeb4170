use chrono::{Datelike, NaiveDate};

use crate::manager::managererror::CalendarError;

const MONTH_DAY_FORMAT: &str = "%m-%d";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Length of `month` in `year`; 0 when the month is outside 1..=12.
pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month < 1 || month > 12 {
        0
    } else if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

/// Two dates denote the same holiday occurrence when month and day coincide,
/// whatever their years.
#[inline]
pub fn same_day_of_year(d1: NaiveDate, d2: NaiveDate) -> bool {
    d1.month() == d2.month() && d1.day() == d2.day()
}

/// The date with `d`'s month and day in `year`. Feb 29 becomes Feb 28 in
/// common years. `None` when `year` is outside chrono's range.
pub fn same_day_in_year(d: NaiveDate, year: i32) -> Option<NaiveDate> {
    let day = d.day().min(days_of_month(year, d.month()));
    NaiveDate::from_ymd_opt(year, d.month(), day)
}

pub fn check_month(month: u32) -> Result<u32, CalendarError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(CalendarError::malformed(format!("month {} is outside 1..=12", month)))
    }
}

/// Parses `"all"` or a comma-separated list such as `"1,3,12"`.
pub fn parse_month_list(months: &str) -> Result<Vec<u32>, CalendarError> {
    let months = months.trim();
    if months.eq_ignore_ascii_case("all") {
        return Ok((1..=12).collect());
    }

    months.split(',')
        .map(|item| {
            let item = item.trim();
            let month: u32 = item.parse()
                .map_err(|_| CalendarError::malformed(format!("'{}' is not a month number", item)))?;
            check_month(month)
        })
        .collect()
}

/// Parses a `MM-DD` string into a date of the given year.
pub fn parse_month_day(month_day: &str, year: i32) -> Result<NaiveDate, CalendarError> {
    let with_year = format!("{}-{}", year, month_day.trim());
    NaiveDate::parse_from_str(&with_year, &format!("%Y-{}", MONTH_DAY_FORMAT))
        .map_err(|error| CalendarError::malformed(format!("'{}' is not a MM-DD date: {}", month_day, error)))
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE_FORMAT)
        .map_err(|error| CalendarError::malformed(format!("'{}' is not a YYYY-MM-DD date: {}", date, error)))
}
