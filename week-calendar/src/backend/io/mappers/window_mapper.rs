use shared::{DayCell, DayStatus, StepMode, WeekPage, WindowRequest, WindowResponse};

use crate::backend::domain::date_math::weekday_names;
use crate::backend::domain::models::{Boundary, CalendarDate, CalendarResult, FirstDayOfWeek};
use crate::backend::domain::selection::{day_state, DayState};
use crate::backend::domain::window_sequence::{Granularity, StepPolicy};
use crate::backend::domain::{WindowQuery, WindowView};
use crate::config::CalendarConfig;

pub struct WindowMapper;

impl WindowMapper {
    /// Convert shared StepMode to a domain StepPolicy
    pub fn step_mode_to_domain(mode: StepMode, radius: u32) -> StepPolicy {
        match mode {
            StepMode::Fixed => StepPolicy::Fixed { radius },
            StepMode::BoundedWeeks => StepPolicy::Bounded {
                granularity: Granularity::Week,
            },
            StepMode::BoundedDays => StepPolicy::Bounded {
                granularity: Granularity::Day,
            },
        }
    }

    /// Convert a domain StepPolicy to shared StepMode
    pub fn step_mode_to_dto(policy: StepPolicy) -> StepMode {
        match policy {
            StepPolicy::Fixed { .. } => StepMode::Fixed,
            StepPolicy::Bounded {
                granularity: Granularity::Week,
            } => StepMode::BoundedWeeks,
            StepPolicy::Bounded {
                granularity: Granularity::Day,
            } => StepMode::BoundedDays,
        }
    }

    /// Parse an optional date key
    pub fn parse_optional(key: Option<&str>) -> CalendarResult<Option<CalendarDate>> {
        key.map(CalendarDate::from_key).transpose()
    }

    /// Convert a WindowRequest into a query for a fresh window around `current`
    pub fn to_query(request: &WindowRequest, config: &CalendarConfig) -> CalendarResult<WindowQuery> {
        let current = CalendarDate::from_key(&request.current)?;
        Self::query_for(current, request, config)
    }

    /// Query rebuilding the window the caller holds, generated for
    /// `generated_for` (falling back to `current`)
    pub fn to_held_query(
        request: &WindowRequest,
        config: &CalendarConfig,
    ) -> CalendarResult<WindowQuery> {
        let reference = request.generated_for.as_deref().unwrap_or(&request.current);
        Self::query_for(CalendarDate::from_key(reference)?, request, config)
    }

    fn query_for(
        current: CalendarDate,
        request: &WindowRequest,
        config: &CalendarConfig,
    ) -> CalendarResult<WindowQuery> {
        let min_date = Self::parse_optional(request.min_date.as_deref())?;
        let max_date = Self::parse_optional(request.max_date.as_deref())?;
        let first_day = FirstDayOfWeek::new(request.first_day.unwrap_or(config.first_day))?;

        Ok(WindowQuery {
            current,
            min_date,
            max_date,
            step: Self::step_mode_to_domain(request.mode, config.page_radius),
            first_day,
        })
    }

    /// Convert a domain DayState to shared DayStatus
    pub fn day_state_to_dto(state: DayState) -> DayStatus {
        match state {
            DayState::Disabled => DayStatus::Disabled,
            DayState::Today => DayStatus::Today,
            DayState::ExtraDay => DayStatus::ExtraDay,
            DayState::Normal => DayStatus::Normal,
        }
    }

    /// Convert a domain WindowView to a WindowResponse DTO
    ///
    /// Day statuses are computed against the live `current` date, which may
    /// differ from the date the window was generated for.
    pub fn to_dto(
        view: &WindowView,
        current: CalendarDate,
        today: CalendarDate,
        disabled_by_default: bool,
    ) -> WindowResponse {
        let sequence = &view.sequence;
        let bounds = sequence.bounds();
        WindowResponse {
            mode: Self::step_mode_to_dto(sequence.policy()),
            first_day: sequence.first_day().into(),
            generated_for: sequence.generated_for().to_key(),
            day_names: weekday_names(sequence.first_day())
                .iter()
                .map(|name| name.to_string())
                .collect(),
            pages: sequence
                .pages()
                .map(|week| WeekPage {
                    anchor: week.first().to_key(),
                    days: week.keys(),
                })
                .collect(),
            days: sequence
                .flattened()
                .iter()
                .map(|entry| DayCell {
                    date: entry.date.to_key(),
                    is_padding: entry.is_padding,
                    status: Self::day_state_to_dto(day_state(
                        entry.date,
                        current,
                        today,
                        &bounds,
                        disabled_by_default,
                    )),
                })
                .collect(),
            scroll_page: view.scroll_page,
            scroll_index: view.scroll_index,
        }
    }

    pub fn boundary_to_dto(boundary: Boundary) -> String {
        boundary.to_string()
    }
}
