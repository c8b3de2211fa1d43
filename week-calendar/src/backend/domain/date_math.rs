//! Primitive date operations.
//!
//! Every operation here is pure and total except [`CalendarDate::from_key`].
//! Arithmetic saturates at chrono's representable range instead of panicking.
//! Day-of-week numbering is fixed at 0 = Sunday; rotation by the configured
//! first day of week happens in [`week_window`](super::week_window).

use chrono::{Datelike, Days, Local, NaiveDate};

use super::models::{CalendarDate, CalendarError, CalendarResult, FirstDayOfWeek};

const SHORT_DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl CalendarDate {
    /// Shift by `n` days (negative moves backwards)
    ///
    /// Saturates at `NaiveDate::MIN`/`MAX`, so near those limits repeated
    /// shifts stop producing distinct days.
    pub fn add_days(self, n: i64) -> Self {
        let shifted = if n >= 0 {
            self.naive().checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.naive().checked_sub_days(Days::new(n.unsigned_abs()))
        };
        let saturated = if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN };
        CalendarDate::from_naive(shifted.unwrap_or(saturated))
    }

    pub fn add_weeks(self, n: i64) -> Self {
        self.add_days(n.saturating_mul(7))
    }

    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub fn day_of_week(&self) -> u32 {
        self.naive().weekday().num_days_from_sunday()
    }

    pub fn same_date(&self, other: &CalendarDate) -> bool {
        self == other
    }

    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn is_before_or_equal(&self, other: &CalendarDate) -> bool {
        self <= other
    }

    pub fn is_after_or_equal(&self, other: &CalendarDate) -> bool {
        self >= other
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.naive().signed_duration_since(self.naive()).num_days()
    }

    /// Canonical `yyyy-MM-dd` key
    ///
    /// Years outside 0000-9999 render with more digits or a sign and are
    /// rejected by [`from_key`](Self::from_key).
    pub fn to_key(&self) -> String {
        self.to_string()
    }

    /// Parse a canonical `yyyy-MM-dd` key
    ///
    /// Only the exact shape is accepted: four digit year, two digit month and
    /// day, dash separated. The parts must also name a real calendar day.
    pub fn from_key(input: &str) -> CalendarResult<Self> {
        let invalid = || CalendarError::InvalidDateFormat {
            input: input.to_string(),
        };

        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = input[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = input[8..10].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate::from_naive)
            .ok_or_else(invalid)
    }
}

/// Today according to the local clock
pub fn today() -> CalendarDate {
    CalendarDate::from_naive(Local::now().date_naive())
}

/// Short day names in display order for the given first day of week
pub fn weekday_names(first_day: FirstDayOfWeek) -> [&'static str; 7] {
    let mut names = SHORT_DAY_NAMES;
    names.rotate_left(first_day.value() as usize);
    names
}
