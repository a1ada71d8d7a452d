//! Calendar dates without a time-of-day component
//!
//! A [`CalendarDate`] is the UTC calendar day an appointment falls on. It is
//! constructed at the input boundaries (request decoding, database rows,
//! holiday payloads) and is immutable afterwards. Its string form is always
//! `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::errors::CityNextError;

/// A date canonicalised to UTC midnight.
///
/// Two values are equal iff they denote the same UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, CityNextError> {
        // chrono accepts signs and unpadded fields; the wire format does not
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            });
        if !well_formed {
            return Err(CityNextError::InvalidInput(format!(
                "invalid date '{value}': expected YYYY-MM-DD"
            )));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT).map(Self).map_err(|err| {
            CityNextError::InvalidInput(format!("invalid date '{value}': {err}"))
        })
    }

    /// Build a date from its components, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Truncate an instant to its UTC calendar day.
    pub fn from_utc_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc).date_naive())
    }

    /// The instant this date starts at (UTC midnight).
    pub fn at_utc_midnight(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.0.and_time(NaiveTime::default()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Shift by a signed number of days, saturating at chrono's date range.
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = CityNextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CityNextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}
