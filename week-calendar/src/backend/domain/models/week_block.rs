use serde::Serialize;

use super::calendar_date::CalendarDate;

pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive days, index 0 being the configured first day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekBlock([CalendarDate; DAYS_PER_WEEK]);

impl WeekBlock {
    /// Build the block starting at `start`
    ///
    /// Days are consecutive only while `start + 6` is representable. Within
    /// six days of chrono's `NaiveDate::MAX` the trailing days saturate and
    /// repeat. Dates parsed from `yyyy-MM-dd` keys (years 0000-9999) never
    /// get that close.
    pub fn starting_at(start: CalendarDate) -> Self {
        let mut days = [start; DAYS_PER_WEEK];
        for (offset, day) in days.iter_mut().enumerate().skip(1) {
            *day = start.add_days(offset as i64);
        }
        WeekBlock(days)
    }

    pub fn first(&self) -> CalendarDate {
        self.0[0]
    }

    pub fn last(&self) -> CalendarDate {
        self.0[DAYS_PER_WEEK - 1]
    }

    pub fn days(&self) -> &[CalendarDate; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.first() <= date && date <= self.last()
    }

    /// Position of `date` inside the block
    pub fn position(&self, date: CalendarDate) -> Option<usize> {
        self.0.iter().position(|day| *day == date)
    }

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|day| day.to_key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_block_is_consecutive() {
        let start: CalendarDate = "2024-02-26".parse().unwrap();
        let block = WeekBlock::starting_at(start);

        assert_eq!(block.first(), start);
        assert_eq!(block.last().to_key(), "2024-03-03");
        assert!(block.contains("2024-02-29".parse().unwrap()));
        assert_eq!(block.position("2024-03-01".parse().unwrap()), Some(4));
        assert_eq!(block.keys().len(), DAYS_PER_WEEK);
    }

    #[test]
    fn test_block_saturates_at_representable_limit() {
        let max = CalendarDate::from_naive(NaiveDate::MAX);
        let block = WeekBlock::starting_at(max.add_days(-3));

        assert_eq!(block.days()[3], max);
        assert_eq!(block.last(), max);
        // Keys beyond year 9999 do not fit the yyyy-MM-dd shape
        assert!(CalendarDate::from_key(&max.to_key()).is_err());
    }

    #[test]
    fn test_block_consecutive_at_last_key_year() {
        let block = WeekBlock::starting_at("9999-12-25".parse().unwrap());
        assert_eq!(block.last().to_key(), "9999-12-31");
        for pair in block.days().windows(2) {
            assert_eq!(pair[0].add_days(1), pair[1]);
        }
    }
}
