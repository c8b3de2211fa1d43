//! Date-window engine for a horizontally paged week calendar.
//!
//! Given a current date, a first day of week and optional min/max bounds,
//! the engine computes the days of a week, the weeks a virtualized list
//! should hold, and the mapping between scroll positions and dates. The UI
//! layer that renders the strip calls in through [`backend::io`].

pub mod backend;
pub mod config;

pub use backend::{initialize_backend, initialize_with_config, AppState};
