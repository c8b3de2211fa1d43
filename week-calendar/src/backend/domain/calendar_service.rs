//! Orchestration of the week calendar control flow.
//!
//! The UI layer owns the current date and calls in whenever it needs a
//! window, changes the date, or settles a scroll gesture. The service only
//! holds configuration; every call is answered from its arguments.

use log::{debug, info};
use shared::{MarkedDates, UpdateSource};

use super::index_mapper::{anchor_for_page, date_for_index, index_for_date, page_for_date};
use super::models::{Boundary, CalendarDate, CalendarResult, DateRange, FirstDayOfWeek};
use super::selection::selection_marks;
use super::window_sequence::{generate, Granularity, RecenterOutcome, StepPolicy, WindowSequence};
use crate::config::CalendarConfig;

/// Everything needed to materialize a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowQuery {
    pub current: CalendarDate,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub step: StepPolicy,
    pub first_day: FirstDayOfWeek,
}

/// A window plus where the list should scroll to show the current date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub sequence: WindowSequence,
    pub scroll_page: Option<usize>,
    pub scroll_index: Option<usize>,
}

/// Outcome of a scroll gesture settling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSettled {
    /// Date the settled position represents
    pub date: CalendarDate,
    /// Replacement window when the gesture ended on an edge page
    pub recentered: Option<WindowView>,
    /// Bound that prevented re-centring
    pub boundary: Option<Boundary>,
}

#[derive(Debug, Clone)]
pub struct WeekCalendarService {
    config: CalendarConfig,
}

impl WeekCalendarService {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Fixed policy with the configured page radius
    pub fn fixed_policy(&self) -> StepPolicy {
        StepPolicy::Fixed {
            radius: self.config.page_radius,
        }
    }

    /// Generate the window for `query` and locate the current date in it
    pub fn window(&self, query: &WindowQuery) -> CalendarResult<WindowView> {
        let bounds = DateRange::new(query.min_date, query.max_date)?;
        let options = self.config.window_options(query.first_day);
        let sequence = generate(query.current, bounds, query.step, &options)?;

        let scroll_page = page_for_date(&sequence, query.current);
        let scroll_index = index_for_date(&sequence, query.current);
        debug!(
            "Window for {}: scroll page {:?}, scroll index {:?}",
            query.current, scroll_page, scroll_index
        );

        Ok(WindowView {
            sequence,
            scroll_page,
            scroll_index,
        })
    }

    /// React to a change of the externally owned current date
    ///
    /// Changes coming from the strip's own scrolling are already on screen and
    /// need nothing. Any other change regenerates the whole window and returns
    /// the position the list must be forced to.
    pub fn on_date_changed(
        &self,
        previous: CalendarDate,
        query: &WindowQuery,
        source: UpdateSource,
    ) -> CalendarResult<Option<WindowView>> {
        if previous == query.current || source == UpdateSource::WeekScroll {
            debug!("Date change {} -> {} from {} needs no regeneration", previous, query.current, source);
            return Ok(None);
        }

        info!("🗓️ Regenerating window: date changed {} -> {} from {}", previous, query.current, source);
        self.window(query).map(Some)
    }

    /// Resolve the date for a settled scroll position and re-centre if needed
    ///
    /// `position` is a page for week-level windows and a day index for
    /// day-level windows.
    pub fn on_scroll_settled(
        &self,
        sequence: &WindowSequence,
        position: usize,
    ) -> CalendarResult<ScrollSettled> {
        let date = match sequence.policy() {
            StepPolicy::Bounded {
                granularity: Granularity::Day,
            } => date_for_index(sequence, position as i64)?,
            _ => anchor_for_page(sequence, position)?,
        };

        let (recentered, boundary) = match sequence.policy() {
            StepPolicy::Fixed { .. } => match sequence.recenter(position)? {
                RecenterOutcome::Unchanged => (None, None),
                RecenterOutcome::AtBoundary(boundary) => (None, Some(boundary)),
                RecenterOutcome::Recentered {
                    sequence,
                    scroll_page,
                } => {
                    let scroll_index = index_for_date(&sequence, date);
                    let view = WindowView {
                        sequence,
                        scroll_page: Some(scroll_page),
                        scroll_index,
                    };
                    (Some(view), None)
                }
            },
            StepPolicy::Bounded { .. } => (None, None),
        };

        Ok(ScrollSettled {
            date,
            recentered,
            boundary,
        })
    }

    /// Caller marks with the current date selected
    pub fn marked_dates(&self, current: CalendarDate, marked: &MarkedDates) -> MarkedDates {
        selection_marks(current, marked)
    }
}

impl Default for WeekCalendarService {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::CalendarError;

    fn date(key: &str) -> CalendarDate {
        key.parse().unwrap()
    }

    fn fixed_query(service: &WeekCalendarService, current: &str) -> WindowQuery {
        WindowQuery {
            current: date(current),
            min_date: None,
            max_date: None,
            step: service.fixed_policy(),
            first_day: FirstDayOfWeek::SUNDAY,
        }
    }

    #[test]
    fn test_window_locates_current_date() {
        let service = WeekCalendarService::default();
        let view = service.window(&fixed_query(&service, "2024-03-15")).unwrap();

        assert_eq!(view.scroll_page, Some(2));
        assert_eq!(view.scroll_index, Some(2 * 7 + 5));
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let service = WeekCalendarService::default();
        let query = WindowQuery {
            min_date: Some(date("2024-02-01")),
            max_date: Some(date("2024-01-01")),
            step: StepPolicy::Bounded {
                granularity: Granularity::Week,
            },
            ..fixed_query(&service, "2024-01-15")
        };

        assert_eq!(
            service.window(&query),
            Err(CalendarError::InvalidRange {
                min: date("2024-02-01"),
                max: date("2024-01-01"),
            })
        );
    }

    #[test]
    fn test_scroll_updates_do_not_regenerate() {
        let service = WeekCalendarService::default();
        let query = fixed_query(&service, "2024-03-22");

        let from_scroll = service
            .on_date_changed(date("2024-03-15"), &query, UpdateSource::WeekScroll)
            .unwrap();
        assert!(from_scroll.is_none());

        let unchanged = service
            .on_date_changed(date("2024-03-22"), &query, UpdateSource::External)
            .unwrap();
        assert!(unchanged.is_none());

        let from_press = service
            .on_date_changed(date("2024-03-15"), &query, UpdateSource::DayPress)
            .unwrap()
            .unwrap();
        assert_eq!(from_press.scroll_page, Some(2));
        assert_eq!(from_press.sequence.anchors()[2], date("2024-03-17"));
    }

    #[test]
    fn test_scroll_settled_on_edge_recentres() {
        let service = WeekCalendarService::default();
        let view = service.window(&fixed_query(&service, "2024-03-15")).unwrap();

        let settled = service.on_scroll_settled(&view.sequence, 0).unwrap();
        assert_eq!(settled.date, date("2024-02-25"));
        assert_eq!(settled.boundary, None);
        let recentered = settled.recentered.unwrap();
        assert_eq!(recentered.scroll_page, Some(2));
        assert_eq!(recentered.sequence.anchors()[2], date("2024-02-25"));
        assert_eq!(recentered.scroll_index, Some(14));

        let middle = service.on_scroll_settled(&view.sequence, 3).unwrap();
        assert_eq!(middle.date, date("2024-03-17"));
        assert!(middle.recentered.is_none());
    }

    #[test]
    fn test_scroll_settled_on_day_window_uses_day_index() {
        let service = WeekCalendarService::default();
        let query = WindowQuery {
            current: date("2024-01-10"),
            min_date: Some(date("2024-01-01")),
            max_date: Some(date("2024-01-21")),
            step: StepPolicy::Bounded {
                granularity: Granularity::Day,
            },
            first_day: FirstDayOfWeek::SUNDAY,
        };
        let view = service.window(&query).unwrap();
        assert_eq!(view.scroll_index, Some(12));
        assert_eq!(view.scroll_page, Some(1));

        let settled = service.on_scroll_settled(&view.sequence, 3).unwrap();
        assert_eq!(settled.date, date("2024-01-01"));
        assert!(settled.recentered.is_none());
        assert!(service.on_scroll_settled(&view.sequence, 500).is_err());
    }

    #[test]
    fn test_marked_dates_selects_current() {
        let service = WeekCalendarService::default();
        let marks = service.marked_dates(date("2024-03-15"), &MarkedDates::new());
        assert!(marks["2024-03-15"].selected);
    }
}
