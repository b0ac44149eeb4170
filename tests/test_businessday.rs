//! Business-day evaluation against hand-built territory calendars.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use businessdays::manager::managererror::CalendarError;
use businessdays::time::calendar::businessday::{is_business_day, next_business_day};
use businessdays::time::calendar::territory::Territory;
use businessdays::time::calendar::territorycalendar::{TerritoryCalendar, build_calendar};
use businessdays::time::holiday::holidayrecord::HolidayRecord;
use businessdays::time::holiday::holidaysource::{FnHolidaySource, HolidaySource};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn territory() -> Territory {
    Territory::new("xx", "Testland", "UTC")
}

/// Serves fixed per-year lists; any other year is unavailable.
struct YearTable(Vec<(i32, Vec<HolidayRecord>)>);

impl HolidaySource for YearTable {
    fn holidays_for(&self, year: i32) -> Result<Vec<HolidayRecord>, CalendarError> {
        self.0.iter()
            .find(|(y, _)| *y == year)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| CalendarError::data_unavailable("xx", year, "not published"))
    }
}

fn calendar_2024(records: Vec<HolidayRecord>) -> TerritoryCalendar {
    let source: Arc<dyn HolidaySource> = Arc::new(YearTable(vec![(2024, records)]));
    build_calendar(territory(), source, 2024).unwrap()
}

fn christmas_calendar() -> TerritoryCalendar {
    calendar_2024(vec![HolidayRecord::new(ymd(2024, 12, 25), "Christmas")])
}

#[test]
fn test_christmas_is_not_a_business_day() {
    let calendar = christmas_calendar();
    assert!(!is_business_day(ymd(2024, 12, 25), &calendar));
    assert!(is_business_day(ymd(2024, 12, 23), &calendar));
}

#[test]
fn test_business_day_is_returned_unchanged() {
    let calendar = christmas_calendar();
    // Tuesday before Christmas
    assert_eq!(next_business_day(ymd(2024, 12, 24), &calendar).unwrap(), ymd(2024, 12, 24));
}

#[test]
fn test_saturday_moves_to_monday() {
    let calendar = christmas_calendar();
    assert!(!is_business_day(ymd(2024, 12, 21), &calendar));
    assert_eq!(next_business_day(ymd(2024, 12, 21), &calendar).unwrap(), ymd(2024, 12, 23));
}

#[test]
fn test_christmas_moves_to_boxing_day() {
    let calendar = christmas_calendar();
    assert_eq!(next_business_day(ymd(2024, 12, 25), &calendar).unwrap(), ymd(2024, 12, 26));
}

#[test]
fn test_holiday_on_saturday_skips_only_once() {
    let calendar = calendar_2024(vec![HolidayRecord::new(ymd(2024, 12, 21), "Saturday feast")]);
    assert_eq!(next_business_day(ymd(2024, 12, 21), &calendar).unwrap(), ymd(2024, 12, 23));
    assert_eq!(next_business_day(ymd(2024, 12, 20), &calendar).unwrap(), ymd(2024, 12, 20));
}

#[test]
fn test_consecutive_holidays_are_all_skipped() {
    let calendar = calendar_2024(vec![
        HolidayRecord::new(ymd(2024, 12, 25), "Christmas"),
        HolidayRecord::new(ymd(2024, 12, 26), "Boxing Day"),
        HolidayRecord::new(ymd(2024, 12, 27), "Bridge day")
    ]);
    // Wednesday to Friday off, then the weekend
    assert_eq!(next_business_day(ymd(2024, 12, 25), &calendar).unwrap(), ymd(2024, 12, 30));
}

#[test]
fn test_flags_do_not_change_business_day_status() {
    let calendar = calendar_2024(vec![
        HolidayRecord::with_flags(ymd(2024, 12, 24), "Christmas Eve", true, true),
        HolidayRecord::with_flags(ymd(2024, 12, 31), "New Year's Eve", true, false),
        HolidayRecord::with_flags(ymd(2024, 11, 29), "Half day only", false, true),
        HolidayRecord::new(ymd(2024, 12, 25), "Christmas")
    ]);
    assert!(!is_business_day(ymd(2024, 12, 24), &calendar));
    assert!(!is_business_day(ymd(2024, 12, 31), &calendar));
    assert!(!is_business_day(ymd(2024, 11, 29), &calendar));
    assert_eq!(next_business_day(ymd(2024, 12, 24), &calendar).unwrap(), ymd(2024, 12, 26));
}

#[test]
fn test_records_match_by_month_and_day_only() {
    // Source hands back last year's dates for the requested year
    let calendar = calendar_2024(vec![HolidayRecord::new(ymd(2023, 12, 25), "Christmas")]);
    assert!(!is_business_day(ymd(2024, 12, 25), &calendar));
}

#[test]
fn test_custom_work_week() {
    let source: Arc<dyn HolidaySource> = Arc::new(YearTable(vec![(2024, vec![])]));
    let territory = territory()
        .with_workdays([Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu]);
    let calendar = build_calendar(territory, source, 2024).unwrap();
    // 2024-12-20 is a Friday, 2024-12-22 a Sunday
    assert!(!is_business_day(ymd(2024, 12, 20), &calendar));
    assert_eq!(next_business_day(ymd(2024, 12, 20), &calendar).unwrap(), ymd(2024, 12, 22));
}

#[test]
fn test_year_end_scan_uses_next_years_holidays() {
    let source: Arc<dyn HolidaySource> = Arc::new(YearTable(vec![
        (2024, vec![HolidayRecord::new(ymd(2024, 12, 31), "New Year's Eve")]),
        (2025, vec![
            HolidayRecord::new(ymd(2025, 1, 1), "New Year"),
            HolidayRecord::new(ymd(2025, 1, 2), "Second day of the year")
        ])
    ]));
    let calendar = build_calendar(territory(), source, 2024).unwrap();
    // 2025-01-02 is unknown to the 2024 list but still skipped
    assert!(is_business_day(ymd(2025, 1, 2), &calendar));
    assert_eq!(next_business_day(ymd(2024, 12, 31), &calendar).unwrap(), ymd(2025, 1, 3));
}

#[test]
fn test_year_end_scan_without_next_year_is_data_unavailable() {
    let calendar = calendar_2024(vec![HolidayRecord::new(ymd(2024, 12, 31), "New Year's Eve")]);
    match next_business_day(ymd(2024, 12, 31), &calendar) {
        Err(CalendarError::DataUnavailable { country, year, .. }) => {
            assert_eq!(country, "xx");
            assert_eq!(year, 2025);
        },
        other => panic!("unexpected result: {:?}", other)
    }
}

#[test]
fn test_year_end_scan_honours_both_years_lists() {
    let source: Arc<dyn HolidaySource> = Arc::new(YearTable(vec![
        (2022, vec![
            HolidayRecord::new(ymd(2022, 1, 3), "Substitute New Year"),
            HolidayRecord::new(ymd(2022, 12, 26), "Boxing Day"),
            HolidayRecord::new(ymd(2022, 12, 27), "Substitute Christmas")
        ]),
        (2023, vec![HolidayRecord::new(ymd(2023, 1, 2), "Substitute New Year")])
    ]));
    let calendar = build_calendar(territory(), source, 2022).unwrap();
    // Saturday; Jan 2 is off in 2023, Jan 3 matches the loaded 2022 list
    let next = next_business_day(ymd(2022, 12, 31), &calendar).unwrap();
    assert_eq!(next, ymd(2023, 1, 4));
    assert!(is_business_day(next, &calendar));
    assert_eq!(next_business_day(next, &calendar).unwrap(), next);
}

#[test]
fn test_year_end_business_day_needs_no_next_year() {
    let calendar = christmas_calendar();
    assert_eq!(next_business_day(ymd(2024, 12, 31), &calendar).unwrap(), ymd(2024, 12, 31));
}

#[test]
fn test_calendar_is_shareable_across_threads() {
    let calendar = Arc::new(christmas_calendar());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calendar = Arc::clone(&calendar);
            std::thread::spawn(move || next_business_day(ymd(2024, 12, 25), &calendar).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), ymd(2024, 12, 26));
    }
}

fn repeating_calendar(workdays: Vec<Weekday>, ordinals: Vec<u32>) -> TerritoryCalendar {
    let source = FnHolidaySource::new("pp", move |year| {
        Ok(ordinals.iter()
            .filter_map(|&o| NaiveDate::from_yo_opt(2024, o))
            .filter_map(|d| NaiveDate::from_ymd_opt(year, d.month(), d.day()))
            .map(|d| (d, "Holiday".to_owned()))
            .collect())
    });
    let source: Arc<dyn HolidaySource> = Arc::new(source);
    build_calendar(territory().with_workdays(workdays), source, 2024).unwrap()
}

fn two_year_calendar(workdays: Vec<Weekday>, this_year: Vec<u32>, next_year: Vec<u32>) -> TerritoryCalendar {
    let records = |year: i32, ordinals: Vec<u32>| -> Vec<HolidayRecord> {
        ordinals.into_iter()
            .filter_map(|o| NaiveDate::from_yo_opt(year, o))
            .map(|d| HolidayRecord::new(d, "Holiday"))
            .collect()
    };
    let source: Arc<dyn HolidaySource> = Arc::new(YearTable(vec![
        (2024, records(2024, this_year)),
        (2025, records(2025, next_year))
    ]));
    build_calendar(territory().with_workdays(workdays), source, 2024).unwrap()
}

fn workdays_strategy() -> impl Strategy<Value = Vec<Weekday>> {
    prop::collection::vec(0u8..7, 1..7)
        .prop_map(|days| days.into_iter().filter_map(|d| Weekday::try_from(d).ok()).collect())
}

proptest! {
    #[test]
    fn test_business_day_implies_workday_and_no_holiday(
        workdays in workdays_strategy(),
        ordinals in prop::collection::vec(1u32..=366, 0..20),
        day in 1u32..=366,
    ) {
        let calendar = repeating_calendar(workdays, ordinals);
        let d = NaiveDate::from_yo_opt(2024, day).unwrap();
        if is_business_day(d, &calendar) {
            prop_assert!(calendar.workdays().contains(&d.weekday()));
            prop_assert!(calendar.holiday_on(d).is_none());
        }
    }

    #[test]
    fn test_next_business_day_properties(
        workdays in workdays_strategy(),
        ordinals in prop::collection::vec(1u32..=366, 0..20),
        day in 1u32..=366,
    ) {
        let calendar = repeating_calendar(workdays, ordinals);
        let d = NaiveDate::from_yo_opt(2024, day).unwrap();
        let next = next_business_day(d, &calendar).unwrap();

        prop_assert!(next >= d);
        prop_assert!(is_business_day(next, &calendar));
        prop_assert_eq!(next_business_day(next, &calendar).unwrap(), next);
        if is_business_day(d, &calendar) {
            prop_assert_eq!(next, d);
        }
        // Nothing in between qualifies
        let mut between = d;
        while between < next {
            prop_assert!(!calendar.workdays().contains(&between.weekday()) || calendar.holiday_on(between).is_some());
            between = between.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_next_business_day_with_differing_years(
        workdays in workdays_strategy(),
        this_year in prop::collection::vec(1u32..=366, 0..20),
        next_year in prop::collection::vec(1u32..=365, 0..20),
        day in 330u32..=366,
    ) {
        let calendar = two_year_calendar(workdays, this_year, next_year);
        let d = NaiveDate::from_yo_opt(2024, day).unwrap();
        let next = next_business_day(d, &calendar).unwrap();

        prop_assert!(next >= d);
        prop_assert!(is_business_day(next, &calendar));
        prop_assert_eq!(next_business_day(next, &calendar).unwrap(), next);
    }
}
