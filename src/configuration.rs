use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{CalendarError, parse_json_value};
use crate::time::calendar::territory::Territory;
use crate::time::calendar::territorycalendar::{
    TerritoryCalendar,
    build_calendar,
    current_year
};
use crate::time::holiday::holidayrecord::HolidayRecord;
use crate::time::holiday::holidaysource::HolidaySource;

const BUNDLED_TERRITORIES: [&str; 2] = [
    include_str!("../data/at.json"),
    include_str!("../data/de.json")
];

/// One territory document: metadata, optional working week and holidays by year.
#[derive(Clone, Deserialize)]
pub struct TerritoryConfig {
    country: String,
    name: String,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    workdays: Option<Vec<Weekday>>,
    #[serde(default)]
    holidays: BTreeMap<i32, Vec<HolidayRecord>>
}

impl TerritoryConfig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn territory(&self) -> Territory {
        let territory = Territory::new(self.country.clone(), self.name.clone(), self.timezone.clone());
        match &self.workdays {
            Some(workdays) => territory.with_workdays(workdays.iter().copied()),
            None => territory
        }
    }

    /// Years with holiday data, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.holidays.keys().copied().collect()
    }
}

impl HolidaySource for TerritoryConfig {
    fn holidays_for(&self, year: i32) -> Result<Vec<HolidayRecord>, CalendarError> {
        self.holidays
            .get(&year)
            .cloned()
            .ok_or_else(|| CalendarError::data_unavailable(&self.country, year, "no holiday data for this year"))
    }
}

fn territory_config_from_json(json_value: serde_json::Value) -> Result<Arc<TerritoryConfig>, CalendarError> {
    let config: TerritoryConfig = parse_json_value(json_value)?;
    Ok(Arc::new(config))
}

/// Registry of territories, keyed by country code.
pub struct Configuration {
    territory_manager: Manager<Arc<TerritoryConfig>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            territory_manager: Manager::new(territory_config_from_json)
        }
    }

    /// A registry preloaded with the territories shipped with the crate.
    pub fn with_bundled() -> Result<Configuration, CalendarError> {
        let config = Configuration::new();
        for json in BUNDLED_TERRITORIES {
            config.territory_manager.from_str(json)?;
        }
        Ok(config)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), CalendarError> {
        self.territory_manager.from_reader(file_path)
    }

    pub fn from_str(&self, json: &str) -> Result<(), CalendarError> {
        self.territory_manager.from_str(json)
    }

    pub fn get(&self, country: &str) -> Result<Arc<TerritoryConfig>, CalendarError> {
        self.territory_manager.get(country)
    }

    pub fn countries(&self) -> Vec<String> {
        self.territory_manager.keys()
    }

    pub fn build_calendar(&self, country: &str, year: i32) -> Result<TerritoryCalendar, CalendarError> {
        let config = self.get(country)?;
        let territory = config.territory();
        build_calendar(territory, config, year)
    }

    pub fn build_calendar_for_current_year(&self, country: &str) -> Result<TerritoryCalendar, CalendarError> {
        self.build_calendar(country, current_year())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
