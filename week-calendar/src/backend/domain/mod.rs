//! # Domain Module
//!
//! Date-window logic behind a horizontally paged week calendar.
//!
//! ## Module Organization
//!
//! - **models**: `CalendarDate`, `FirstDayOfWeek`, `DateRange`, `WeekBlock` and errors
//! - **date_math**: day arithmetic, comparisons and the `yyyy-MM-dd` key format
//! - **week_window**: the seven days of the week containing a date
//! - **window_sequence**: the weeks a scrolling list holds, and re-centring
//! - **index_mapper**: scroll positions to dates and back
//! - **selection**: selected marks and day-cell states
//! - **calendar_service**: the call flow used by the UI layer
//!
//! Everything here is synchronous and free of shared mutable state. The
//! current date belongs to the caller and is passed into every call.

pub mod calendar_service;
pub mod date_math;
pub mod index_mapper;
pub mod models;
pub mod selection;
pub mod week_window;
pub mod window_sequence;

pub use calendar_service::*;
pub use date_math::{today, weekday_names};
pub use index_mapper::*;
pub use models::*;
pub use selection::*;
pub use week_window::*;
pub use window_sequence::*;
