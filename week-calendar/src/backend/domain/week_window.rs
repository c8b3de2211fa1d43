use log::debug;

use super::models::{CalendarDate, FirstDayOfWeek, WeekBlock};

/// Days between the start of the week and `anchor`, always in [0, 6]
pub fn week_offset(anchor: CalendarDate, first_day: FirstDayOfWeek) -> u32 {
    (anchor.day_of_week() as i64 - first_day.value() as i64).rem_euclid(7) as u32
}

/// First day of the week containing `anchor`
pub fn week_start(anchor: CalendarDate, first_day: FirstDayOfWeek) -> CalendarDate {
    anchor.add_days(-(week_offset(anchor, first_day) as i64))
}

/// The seven days of the week containing `anchor`
pub fn compute_week(anchor: CalendarDate, first_day: FirstDayOfWeek) -> WeekBlock {
    let start = week_start(anchor, first_day);
    debug!("Week for {} (first day {}) starts {}", anchor, first_day.value(), start);
    WeekBlock::starting_at(start)
}
