//! # Backend Module
//!
//! Contains all non-UI logic for the week calendar.
//!
//! ```text
//! UI Layer (list virtualization, gestures, rendering)
//!     ↓
//! IO Layer (commands, DTO mappers)
//!     ↓
//! Domain Layer (date math, week windows, index mapping)
//! ```

pub mod domain;
pub mod io;

use log::info;

use crate::backend::domain::WeekCalendarService;
use crate::config::{CalendarConfig, ConfigError};

/// Services shared by every command handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub calendar_service: WeekCalendarService,
}

/// Build the application state from the environment's configuration
pub fn initialize_backend() -> Result<AppState, ConfigError> {
    info!("Loading calendar configuration");
    let config = CalendarConfig::load_from_env()?;
    initialize_with_config(config)
}

pub fn initialize_with_config(config: CalendarConfig) -> Result<AppState, ConfigError> {
    config.validate()?;
    info!(
        "Week calendar ready: first day {}, page radius {}, padding {} days",
        config.first_day, config.page_radius, config.padding_days
    );
    Ok(AppState {
        calendar_service: WeekCalendarService::new(config),
    })
}
