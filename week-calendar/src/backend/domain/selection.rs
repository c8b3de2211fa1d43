//! Per-day presentation facts derived from the current date.
//!
//! Nothing here is stored: marks and states are recomputed from the
//! caller-owned current date on every access.

use serde::{Deserialize, Serialize};
use shared::{DayMarking, MarkedDates};

use super::models::{CalendarDate, DateRange};

/// How a day cell should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    /// Outside the selectable range, or everything is disabled
    Disabled,
    /// Today, or the current date
    Today,
    /// Belongs to a different month than the current date
    ExtraDay,
    Normal,
}

/// Caller marks with the current date flagged as selected
pub fn selection_marks(current: CalendarDate, marked: &MarkedDates) -> MarkedDates {
    let mut marks = marked.clone();
    marks
        .entry(current.to_key())
        .or_insert_with(DayMarking::default)
        .selected = true;
    marks
}

pub fn is_selected(marks: &MarkedDates, date: CalendarDate) -> bool {
    marks
        .get(&date.to_key())
        .map(|marking| marking.selected)
        .unwrap_or(false)
}

/// Classify `day` relative to the current date, today and the bounds
pub fn day_state(
    day: CalendarDate,
    current: CalendarDate,
    today: CalendarDate,
    bounds: &DateRange,
    disabled_by_default: bool,
) -> DayState {
    if disabled_by_default || !bounds.contains(day) {
        DayState::Disabled
    } else if day == today || day == current {
        DayState::Today
    } else if !day.same_month(&current) {
        DayState::ExtraDay
    } else {
        DayState::Normal
    }
}
