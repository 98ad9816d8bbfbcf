//! Calendar configuration file and environment support.
//!
//! Settings are read from a `calendar.toml` file and may be overridden by
//! environment variables. Every section is optional; missing values fall back
//! to the defaults documented on each field.
//!
//! ```toml
//! [availability]
//! min_duration_minutes = 15
//! prune_empty_entries = false
//!
//! [clock]
//! utc_offset_minutes = 600
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};

/// Environment variable overriding `availability.min_duration_minutes`.
pub const ENV_MIN_DURATION: &str = "CALENDAR_MIN_DURATION_MINUTES";
/// Environment variable overriding `availability.prune_empty_entries`.
pub const ENV_PRUNE_EMPTY: &str = "CALENDAR_PRUNE_EMPTY_ENTRIES";
/// Environment variable overriding `clock.utc_offset_minutes`.
pub const ENV_UTC_OFFSET: &str = "CALENDAR_UTC_OFFSET_MINUTES";

/// Calendar configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub availability: AvailabilitySettings,
    #[serde(default)]
    pub clock: ClockSettings,
}

/// Validation rules applied by the availability store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySettings {
    /// Shortest accepted start→end span, in minutes (default: 15)
    #[serde(default = "default_min_duration_minutes")]
    pub min_duration_minutes: u16,
    /// Drop an entry once both of its fields are cleared (default: false)
    #[serde(default)]
    pub prune_empty_entries: bool,
}

/// How "today" is determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// Fixed offset east of UTC in minutes; unset means the host's local zone
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

fn default_min_duration_minutes() -> u16 {
    15
}

impl Default for AvailabilitySettings {
    fn default() -> Self {
        Self {
            min_duration_minutes: default_min_duration_minutes(),
            prune_empty_entries: false,
        }
    }
}

impl CalendarConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CalendarResult<Self> {
        let config: CalendarConfig = toml::from_str(content).map_err(|e| {
            CalendarError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CalendarError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the first `calendar.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> CalendarResult<Self> {
        match Self::default_path() {
            Some(path) => Self::from_file(path),
            None => Err(CalendarError::Configuration(
                "No calendar.toml found in standard locations".to_string(),
            )),
        }
    }

    fn default_path() -> Option<PathBuf> {
        [
            PathBuf::from("calendar.toml"),
            PathBuf::from("backend/calendar.toml"),
            PathBuf::from("../calendar.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Defaults with environment overrides applied.
    ///
    /// # Environment Variables
    /// - `CALENDAR_MIN_DURATION_MINUTES` (optional, default: 15)
    /// - `CALENDAR_PRUNE_EMPTY_ENTRIES` (optional, default: false)
    /// - `CALENDAR_UTC_OFFSET_MINUTES` (optional, default: host local zone)
    pub fn from_env() -> CalendarResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// File at the default location if one exists, otherwise defaults; then
    /// environment overrides on top.
    pub fn load() -> CalendarResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) => {
                log::debug!("Loading calendar configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Overwrite settings with any `CALENDAR_*` environment variables that are set.
    pub fn apply_env_overrides(&mut self) -> CalendarResult<()> {
        if let Ok(raw) = env::var(ENV_MIN_DURATION) {
            self.availability.min_duration_minutes = raw.trim().parse().map_err(|_| {
                CalendarError::Configuration(format!(
                    "{} must be a whole number of minutes, got '{}'",
                    ENV_MIN_DURATION, raw
                ))
            })?;
        }
        if let Ok(raw) = env::var(ENV_PRUNE_EMPTY) {
            self.availability.prune_empty_entries = raw.trim().parse().map_err(|_| {
                CalendarError::Configuration(format!(
                    "{} must be 'true' or 'false', got '{}'",
                    ENV_PRUNE_EMPTY, raw
                ))
            })?;
        }
        if let Ok(raw) = env::var(ENV_UTC_OFFSET) {
            let minutes = raw.trim().parse().map_err(|_| {
                CalendarError::Configuration(format!(
                    "{} must be a signed number of minutes, got '{}'",
                    ENV_UTC_OFFSET, raw
                ))
            })?;
            self.clock.utc_offset_minutes = Some(minutes);
        }
        self.validate()
    }

    /// Check every setting is within range.
    pub fn validate(&self) -> CalendarResult<()> {
        let min = self.availability.min_duration_minutes;
        if !(1..=1439).contains(&min) {
            return Err(CalendarError::Configuration(format!(
                "min_duration_minutes must be between 1 and 1439, got {}",
                min
            )));
        }
        if let Some(offset) = self.clock.utc_offset_minutes {
            if !(-1439..=1439).contains(&offset) {
                return Err(CalendarError::Configuration(format!(
                    "utc_offset_minutes must be between -1439 and 1439, got {}",
                    offset
                )));
            }
        }
        Ok(())
    }
}
