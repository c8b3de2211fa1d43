use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How the window of weeks should be materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Free scrolling: a fixed number of weeks centred on the current date
    Fixed,
    /// Every week between the minimum and maximum date
    BoundedWeeks,
    /// Every day between the minimum and maximum date, with leading padding days
    BoundedDays,
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::Fixed
    }
}

/// Origin of a change to the externally owned current date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateSource {
    /// The user scrolled the week strip itself
    WeekScroll,
    /// The user pressed a day cell
    DayPress,
    /// Anything else (another calendar view, a "today" button, app logic)
    External,
}

impl fmt::Display for UpdateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSource::WeekScroll => write!(f, "week_scroll"),
            UpdateSource::DayPress => write!(f, "day_press"),
            UpdateSource::External => write!(f, "external"),
        }
    }
}

/// Request for the materialized window of a week calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRequest {
    /// Current date (yyyy-MM-dd)
    pub current: String,
    /// Optional first day of week override (0 = Sunday ... 6 = Saturday)
    pub first_day: Option<u8>,
    /// Minimum selectable date (yyyy-MM-dd)
    pub min_date: Option<String>,
    /// Maximum selectable date (yyyy-MM-dd)
    pub max_date: Option<String>,
    #[serde(default)]
    pub mode: StepMode,
    /// Date the window the caller currently holds was generated for
    /// (`WindowResponse::generated_for`). Scrolling moves `current` without
    /// regenerating the list, so position lookups must rebuild the held
    /// window from this date rather than from `current`. Defaults to `current`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_for: Option<String>,
    /// Render every day as disabled
    #[serde(default)]
    pub disabled_by_default: bool,
}

/// One page of the horizontal strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPage {
    /// First day of the week this page shows
    pub anchor: String,
    /// The seven days of the week, first day of week first
    pub days: Vec<String>,
}

/// How a day cell should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Outside the selectable range, or everything is disabled
    Disabled,
    /// Today, or the current date
    Today,
    /// Belongs to a different month than the current date
    ExtraDay,
    Normal,
}

/// One entry of the flattened day view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: String,
    /// Synthetic entry placed before the minimum date
    pub is_padding: bool,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResponse {
    pub mode: StepMode,
    pub first_day: u8,
    /// Reference date of this window; send it back as `WindowRequest::generated_for`
    pub generated_for: String,
    /// Short day names in display order
    pub day_names: Vec<String>,
    pub pages: Vec<WeekPage>,
    pub days: Vec<DayCell>,
    /// Page the list should be scrolled to, if the current date is materialized
    pub scroll_page: Option<usize>,
    /// Day index the list should be scrolled to, if the current date is materialized
    pub scroll_index: Option<usize>,
}

/// Resolve a snapped position back to a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveIndexRequest {
    pub window: WindowRequest,
    pub index: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveIndexResponse {
    pub date: String,
    pub is_padding: bool,
}

/// Resolve a date to the position the list should scroll to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveDateRequest {
    pub window: WindowRequest,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveDateResponse {
    /// `None` when the date is outside the materialized window
    pub index: Option<usize>,
    pub page: Option<usize>,
    /// Date actually located, moved inside the min/max range when needed
    pub resolved: String,
    /// Bound ("min" or "max") the requested date was clamped to
    pub boundary: Option<String>,
}

/// Resolve a scroll offset measured in day-sized items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOffsetRequest {
    pub window: WindowRequest,
    pub offset: f64,
    pub item_width: f64,
}

/// Notification that the externally owned current date changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateChangedRequest {
    pub previous: String,
    pub window: WindowRequest,
    pub source: UpdateSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateChangedResponse {
    /// Replacement window, present only when a regeneration was required
    pub window: Option<WindowResponse>,
}

/// Notification that a scroll gesture settled on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollSettledRequest {
    pub window: WindowRequest,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollSettledResponse {
    /// Date the settled page represents
    pub date: String,
    /// Re-centred window when the page was at an edge
    pub window: Option<WindowResponse>,
    /// Bound that stopped a re-centre ("min" or "max")
    pub boundary: Option<String>,
}

/// Marking flags for a single day, keyed by date in a `MarkedDates` map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarking {
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub marked: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<String>,
}

pub type MarkedDates = BTreeMap<String, DayMarking>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub current: String,
    #[serde(default)]
    pub marked_dates: MarkedDates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub marked_dates: MarkedDates,
}

/// A single command sent by the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CalendarCommand {
    Window(WindowRequest),
    ResolveIndex(ResolveIndexRequest),
    ResolveDate(ResolveDateRequest),
    ResolveOffset(ResolveOffsetRequest),
    DateChanged(DateChangedRequest),
    ScrollSettled(ScrollSettledRequest),
    Selection(SelectionRequest),
}

/// Envelope written back for every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResponse {
    Ok { result: serde_json::Value },
    Error { message: String },
}
