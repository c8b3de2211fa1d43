//! Value types shared by every layer of the week calendar domain.
//!
//! `CalendarDate` is a day without a time component. Its canonical key
//! (`yyyy-MM-dd`) is what the UI layer passes around, so `Display`, serde and
//! `FromStr` all go through that key. The arithmetic lives in
//! [`date_math`](crate::backend::domain::date_math).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{CalendarError, CalendarResult};

/// A calendar day (year, month, day) with no time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, rejecting impossible days such as Feb 30
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CalendarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CalendarError::InvalidDateFormat {
                input: format!("{:04}-{:02}-{:02}", year, month, day),
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::from_key(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CalendarDate::from_key(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_key()
    }
}

/// First day of the week (0 = Sunday, 1 = Monday, ... 6 = Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FirstDayOfWeek(u8);

impl FirstDayOfWeek {
    pub const SUNDAY: FirstDayOfWeek = FirstDayOfWeek(0);
    pub const MONDAY: FirstDayOfWeek = FirstDayOfWeek(1);

    pub fn new(value: u8) -> CalendarResult<Self> {
        if value > 6 {
            return Err(CalendarError::InvalidFirstDay(value));
        }
        Ok(FirstDayOfWeek(value))
    }

    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u8> for FirstDayOfWeek {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FirstDayOfWeek::new(value)
    }
}

impl From<FirstDayOfWeek> for u8 {
    fn from(day: FirstDayOfWeek) -> Self {
        day.0
    }
}

/// Which side of a [`DateRange`] was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Min,
    Max,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Min => write!(f, "min"),
            Boundary::Max => write!(f, "max"),
        }
    }
}

/// Optional minimum/maximum selectable dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

impl DateRange {
    /// Build a range, rejecting a minimum that lies after the maximum
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> CalendarResult<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(CalendarError::InvalidRange { min, max });
            }
        }
        Ok(DateRange { min, max })
    }

    pub fn unbounded() -> Self {
        DateRange::default()
    }

    pub fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    pub fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    /// The bound `date` falls outside of, if any
    pub fn violated_by(&self, date: CalendarDate) -> Option<Boundary> {
        match (self.min, self.max) {
            (Some(min), _) if date < min => Some(Boundary::Min),
            (_, Some(max)) if date > max => Some(Boundary::Max),
            _ => None,
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.violated_by(date).is_none()
    }

    /// Move `date` inside the range, reporting which bound (if any) was applied
    pub fn clamp(&self, date: CalendarDate) -> (CalendarDate, Option<Boundary>) {
        match self.violated_by(date) {
            Some(Boundary::Min) => (self.min.unwrap_or(date), Some(Boundary::Min)),
            Some(Boundary::Max) => (self.max.unwrap_or(date), Some(Boundary::Max)),
            None => (date, None),
        }
    }
}
