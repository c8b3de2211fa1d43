//! Generation of the week anchors a horizontally paged list holds.
//!
//! Two policies exist. `Fixed` keeps `2k+1` weeks centred on the current
//! date and is re-centred whenever the user reaches either end, which keeps
//! the strip effectively infinite with bounded memory. `Bounded` materializes
//! every week from the minimum date up to the week that reaches the maximum
//! date, optionally flattened to individual days with a few padding days in
//! front of the minimum so the first page has a stable leading edge.
//!
//! A generated [`WindowSequence`] is an immutable snapshot. Callers replace it
//! wholesale when the current date changes from outside the list.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::models::{
    Boundary, CalendarDate, CalendarError, CalendarResult, DateRange, FirstDayOfWeek, WeekBlock,
};
use super::week_window::week_start;

/// Level of detail for bounded windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Week,
    Day,
}

/// How the window is stepped out from its reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// `2 * radius + 1` weeks centred on the current date
    Fixed { radius: u32 },
    /// Every week between the minimum and maximum date
    Bounded { granularity: Granularity },
}

/// Knobs that stay constant for a rendering session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    pub first_day: FirstDayOfWeek,
    /// Synthetic days placed before the minimum date in day-level windows
    pub padding_days: u32,
    /// Maximum number of weeks a bounded window may contain
    pub safety_cap: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            first_day: FirstDayOfWeek::SUNDAY,
            padding_days: 3,
            safety_cap: 5300,
        }
    }
}

/// One day of the flattened view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub date: CalendarDate,
    pub is_padding: bool,
}

/// End of a fixed window the user has scrolled to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

/// Result of asking a window to re-centre on a settled page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecenterOutcome {
    /// Not an edge page, or the window is bounded
    Unchanged,
    /// Replacement window; scrolling to `scroll_page` keeps the same week on screen
    Recentered {
        sequence: WindowSequence,
        scroll_page: usize,
    },
    /// The edge week lies entirely outside the configured range
    AtBoundary(Boundary),
}

/// Materialized content of the week strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSequence {
    reference: CalendarDate,
    policy: StepPolicy,
    first_day: FirstDayOfWeek,
    bounds: DateRange,
    anchors: Vec<CalendarDate>,
    days: Vec<DayEntry>,
}

/// Build the window for `current` under the given policy
pub fn generate(
    current: CalendarDate,
    bounds: DateRange,
    step: StepPolicy,
    options: &WindowOptions,
) -> CalendarResult<WindowSequence> {
    let sequence = match step {
        StepPolicy::Fixed { radius } => {
            // 2 * radius + 1 weeks must fit under the cap
            if u64::from(radius) * 2 + 1 > u64::from(options.safety_cap) {
                warn!("Fixed window radius {} exceeds {} weeks", radius, options.safety_cap);
                return Err(CalendarError::NonTerminatingBound {
                    cap: options.safety_cap,
                });
            }
            fixed_window(current, bounds, radius, options.first_day)
        }
        StepPolicy::Bounded { granularity } => bounded_window(current, bounds, granularity, options)?,
    };

    debug!(
        "Generated {:?} window for {}: {} pages, {} days",
        step,
        current,
        sequence.anchors.len(),
        sequence.days.len()
    );
    Ok(sequence)
}

fn fixed_window(
    current: CalendarDate,
    bounds: DateRange,
    radius: u32,
    first_day: FirstDayOfWeek,
) -> WindowSequence {
    let center = week_start(current, first_day);
    let radius = i64::from(radius);
    let anchors: Vec<CalendarDate> = (-radius..=radius).map(|i| center.add_weeks(i)).collect();

    let days = anchors
        .iter()
        .flat_map(|anchor| WeekBlock::starting_at(*anchor).iter().collect::<Vec<_>>())
        .map(|date| DayEntry { date, is_padding: false })
        .collect();

    WindowSequence {
        reference: current,
        policy: StepPolicy::Fixed {
            radius: radius as u32,
        },
        first_day,
        bounds,
        anchors,
        days,
    }
}

fn bounded_window(
    current: CalendarDate,
    bounds: DateRange,
    granularity: Granularity,
    options: &WindowOptions,
) -> CalendarResult<WindowSequence> {
    let cap = options.safety_cap;
    let Some(max) = bounds.max() else {
        warn!("Bounded window requested without a maximum date");
        return Err(CalendarError::NonTerminatingBound { cap });
    };
    let origin = bounds.min().unwrap_or(current);
    if origin > max {
        warn!("Bounded window starts at {} after maximum {}", origin, max);
        return Err(CalendarError::InvalidRange { min: origin, max });
    }

    let mut anchors = Vec::new();
    let mut anchor = week_start(origin, options.first_day);
    loop {
        if anchors.len() as u64 >= u64::from(cap) {
            warn!("Bounded window from {} to {} exceeds {} weeks", origin, max, cap);
            return Err(CalendarError::NonTerminatingBound { cap });
        }
        anchors.push(anchor);
        if WeekBlock::starting_at(anchor).last() >= max {
            break;
        }
        anchor = anchor.add_weeks(1);
    }

    let regular = anchors
        .iter()
        .flat_map(|anchor| WeekBlock::starting_at(*anchor).iter().collect::<Vec<_>>());
    let days = match granularity {
        Granularity::Week => regular
            .map(|date| DayEntry { date, is_padding: false })
            .collect(),
        Granularity::Day => {
            let padding = (1..=i64::from(options.padding_days))
                .rev()
                .map(|n| DayEntry {
                    date: origin.add_days(-n),
                    is_padding: true,
                });
            padding
                .chain(
                    regular
                        .filter(|date| *date >= origin)
                        .map(|date| DayEntry { date, is_padding: false }),
                )
                .collect()
        }
    };

    Ok(WindowSequence {
        reference: current,
        policy: StepPolicy::Bounded { granularity },
        first_day: options.first_day,
        bounds,
        anchors,
        days,
    })
}

impl WindowSequence {
    /// Date this window was generated for
    pub fn generated_for(&self) -> CalendarDate {
        self.reference
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    pub fn first_day(&self) -> FirstDayOfWeek {
        self.first_day
    }

    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    /// First day of every materialized week, in scroll order
    pub fn anchors(&self) -> &[CalendarDate] {
        &self.anchors
    }

    pub fn pages(&self) -> impl Iterator<Item = WeekBlock> + '_ {
        self.anchors.iter().map(|anchor| WeekBlock::starting_at(*anchor))
    }

    /// Day-level view, padding days included
    pub fn flattened(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn page_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.days.iter().any(|entry| entry.date == date)
    }

    /// Which end of the window `page` sits on, if any
    pub fn edge_of(&self, page: usize) -> Option<Edge> {
        if page == 0 {
            Some(Edge::First)
        } else if page + 1 == self.anchors.len() {
            Some(Edge::Last)
        } else {
            None
        }
    }

    /// Re-centre a fixed window on the settled `page` if it is an edge page
    pub fn recenter(&self, page: usize) -> CalendarResult<RecenterOutcome> {
        if page >= self.anchors.len() {
            return Err(CalendarError::IndexOutOfRange {
                index: page as i64,
                len: self.anchors.len(),
            });
        }

        let radius = match self.policy {
            StepPolicy::Fixed { radius } if radius > 0 => radius,
            _ => return Ok(RecenterOutcome::Unchanged),
        };
        let Some(edge) = self.edge_of(page) else {
            return Ok(RecenterOutcome::Unchanged);
        };

        let week = WeekBlock::starting_at(self.anchors[page]);
        if let Some(min) = self.bounds.min() {
            if week.last() < min {
                return Ok(RecenterOutcome::AtBoundary(Boundary::Min));
            }
        }
        if let Some(max) = self.bounds.max() {
            if week.first() > max {
                return Ok(RecenterOutcome::AtBoundary(Boundary::Max));
            }
        }

        info!("📅 Re-centring window on {:?} edge week {}", edge, week.first());
        Ok(RecenterOutcome::Recentered {
            sequence: fixed_window(week.first(), self.bounds, radius, self.first_day),
            scroll_page: radius as usize,
        })
    }
}
