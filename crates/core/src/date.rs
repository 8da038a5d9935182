// SPDX-License-Identifier: MIT

//!
//! The Range Timeline date types
//!

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The format date inputs are entered in (and that native date pickers emit)
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// The format dates are displayed in on a timeline (e.g. `Mon Jan 01 2024`)
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Errors that can arise in relation to a [`CalendarDate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    /// The input isn't a `YYYY-MM-DD` calendar date
    #[error("`{input}` is not a valid date (expected YYYY-MM-DD)")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A calendar day (no time, no time zone)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a [`CalendarDate`] from year, month and day numbers if they form
    /// a real date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Parse a `YYYY-MM-DD` string (surrounding whitespace is ignored)
    pub fn parse(input: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT)
            .map(CalendarDate)
            .map_err(|source| DateError::Parse {
                input: input.to_string(),
                source,
            })
    }

    /// The underlying [`NaiveDate`]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Midnight at the start of the day
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// e.g. `Mon Jan 01 2024`
    pub fn to_date_string(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// e.g. `2024-01-01`
    pub fn to_input_string(&self) -> String {
        self.0.format(INPUT_DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        CalendarDate(value)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_input_string())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_input_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        CalendarDate::parse(&string).map_err(serde::de::Error::custom)
    }
}

/// The two dates a timeline spans.
///
/// `start <= end` is not checked.  An inverted range is drawn as-is (start on
/// the left, the axis running backwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Create a new [`DateRange`]
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Get the start date
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Get the end date
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Whether the end date comes before the start date
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Signed number of days from start to end
    pub fn span_days(&self) -> i64 {
        (self.end.naive() - self.start.naive()).num_days()
    }
}
