use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("holiday data unavailable for '{country}' in {year}: {reason}")]
    DataUnavailable {
        country: String,
        year: i32,
        reason: String
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("no business day found within {limit} days after {start}")]
    ScanLimitExceeded {
        start: NaiveDate,
        limit: u32
    },

    #[error("territory '{0}' not found")]
    UnknownTerritory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error)
}

impl CalendarError {
    pub fn data_unavailable(country: &str, year: i32, reason: impl Into<String>) -> CalendarError {
        CalendarError::DataUnavailable {
            country: country.to_owned(),
            year,
            reason: reason.into()
        }
    }

    pub fn malformed(message: impl Into<String>) -> CalendarError {
        CalendarError::MalformedInput(message.into())
    }

    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, CalendarError::DataUnavailable { .. })
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, CalendarError>
where
    T: for<'a> Deserialize<'a>
{
    serde_json::from_value(json_value).map_err(CalendarError::JsonParse)
}
