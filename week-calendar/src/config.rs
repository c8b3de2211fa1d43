//! # Configuration
//!
//! Session-wide settings for the week calendar, read from a YAML file.
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```yaml
//! first_day: 1      # 0 = Sunday ... 6 = Saturday
//! page_radius: 2    # fixed windows hold 2 * page_radius + 1 weeks
//! padding_days: 3   # synthetic days before the minimum date
//! safety_cap: 5300  # most weeks a bounded window may hold
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::models::FirstDayOfWeek;
use crate::backend::domain::window_sequence::WindowOptions;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "WEEK_CALENDAR_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("first_day must be between 0 and 6, got {0}")]
    InvalidFirstDay(u8),
    #[error("safety_cap must be at least 1")]
    ZeroSafetyCap,
    #[error("page_radius {radius} needs more than safety_cap {cap} weeks")]
    PageRadiusTooLarge { radius: u32, cap: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub first_day: u8,
    pub page_radius: u32,
    pub padding_days: u32,
    pub safety_cap: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_day: 0,
            page_radius: 2,
            padding_days: 3,
            safety_cap: 5300,
        }
    }
}

impl CalendarConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CalendarConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded calendar config from {}", path.display());
        Ok(config)
    }

    /// Load from `WEEK_CALENDAR_CONFIG` when set, defaults otherwise
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                info!("{} not set, using default calendar config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_day > 6 {
            warn!("Rejecting config with first_day {}", self.first_day);
            return Err(ConfigError::InvalidFirstDay(self.first_day));
        }
        if self.safety_cap == 0 {
            return Err(ConfigError::ZeroSafetyCap);
        }
        // A fixed window holds 2 * page_radius + 1 weeks
        if u64::from(self.page_radius) * 2 + 1 > u64::from(self.safety_cap) {
            warn!(
                "Rejecting config with page_radius {} over safety_cap {}",
                self.page_radius, self.safety_cap
            );
            return Err(ConfigError::PageRadiusTooLarge {
                radius: self.page_radius,
                cap: self.safety_cap,
            });
        }
        Ok(())
    }

    pub fn first_day_of_week(&self) -> Result<FirstDayOfWeek, ConfigError> {
        FirstDayOfWeek::new(self.first_day).map_err(|_| ConfigError::InvalidFirstDay(self.first_day))
    }

    /// Window options, optionally overriding the configured first day of week
    pub fn window_options(&self, first_day: FirstDayOfWeek) -> WindowOptions {
        WindowOptions {
            first_day,
            padding_days: self.padding_days,
            safety_cap: self.safety_cap,
        }
    }
}
