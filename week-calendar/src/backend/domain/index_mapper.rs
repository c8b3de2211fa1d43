//! Translation between list positions and calendar dates.
//!
//! Day indices address the flattened view of a [`WindowSequence`] (padding
//! days included); page indices address its week anchors.

use log::warn;

use super::models::{CalendarDate, CalendarError, CalendarResult};
use super::window_sequence::{DayEntry, WindowSequence};

/// Position of `date` in the flattened view, `None` when it is not materialized
pub fn index_for_date(sequence: &WindowSequence, date: CalendarDate) -> Option<usize> {
    sequence.flattened().iter().position(|entry| entry.date == date)
}

/// Entry at `index` in the flattened view
pub fn entry_for_index(sequence: &WindowSequence, index: i64) -> CalendarResult<DayEntry> {
    let days = sequence.flattened();
    usize::try_from(index)
        .ok()
        .and_then(|i| days.get(i).copied())
        .ok_or_else(|| {
            warn!("Index {} outside window of {} days", index, days.len());
            CalendarError::IndexOutOfRange {
                index,
                len: days.len(),
            }
        })
}

/// Date at `index` in the flattened view
pub fn date_for_index(sequence: &WindowSequence, index: i64) -> CalendarResult<CalendarDate> {
    entry_for_index(sequence, index).map(|entry| entry.date)
}

/// Page whose week contains `date`
pub fn page_for_date(sequence: &WindowSequence, date: CalendarDate) -> Option<usize> {
    sequence.pages().position(|week| week.contains(date))
}

/// Week anchor shown on `page`
pub fn anchor_for_page(sequence: &WindowSequence, page: usize) -> CalendarResult<CalendarDate> {
    sequence
        .anchors()
        .get(page)
        .copied()
        .ok_or(CalendarError::IndexOutOfRange {
            index: page as i64,
            len: sequence.page_count(),
        })
}

/// Snap a scroll offset to an item index
///
/// Rounds to the nearest item; an offset exactly halfway between two items
/// snaps to the later one.
pub fn snap_index(offset: f64, item_width: f64) -> CalendarResult<i64> {
    if !offset.is_finite() || !item_width.is_finite() || item_width <= 0.0 {
        return Err(CalendarError::InvalidSnapGeometry {
            offset,
            width: item_width,
        });
    }
    let position = (offset / item_width + 0.5).floor();
    if position < i64::MIN as f64 || position >= i64::MAX as f64 {
        return Err(CalendarError::InvalidSnapGeometry {
            offset,
            width: item_width,
        });
    }
    Ok(position as i64)
}

/// Entry under a scroll offset measured in day-sized items
pub fn entry_for_offset(
    sequence: &WindowSequence,
    offset: f64,
    item_width: f64,
) -> CalendarResult<DayEntry> {
    let index = snap_index(offset, item_width)?;
    entry_for_index(sequence, index)
}
