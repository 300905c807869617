use crate::error::{config_error, DeskResult};
use crate::utils::time::parse_time;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Default location of the optional config file
pub const CONFIG_FILE: &str = "config/shiftdesk.toml";

/// Default shift start used for all-day slot selections
pub const DEFAULT_SHIFT_START: &str = "09:00";

/// Default shift end used for all-day slot selections
pub const DEFAULT_SHIFT_END: &str = "18:00";

/// Main configuration structure for the shift calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// IANA time zone the calendar works in
    pub timezone: String,
    /// Start of a shift created from an all-day slot, `HH:MM`
    pub default_shift_start: String,
    /// End of a shift created from an all-day slot, `HH:MM`
    pub default_shift_end: String,
}

/// Values that may be overridden from the config file
#[derive(Debug, Deserialize)]
struct FileOverrides {
    timezone: Option<String>,
    default_shift_start: Option<String>,
    default_shift_end: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: String::from("UTC"),
            default_shift_start: String::from(DEFAULT_SHIFT_START),
            default_shift_end: String::from(DEFAULT_SHIFT_END),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> DeskResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config {
            timezone: env::var("SHIFTDESK_TIMEZONE").unwrap_or_else(|_| String::from("UTC")),
            default_shift_start: env::var("SHIFTDESK_DEFAULT_SHIFT_START")
                .unwrap_or_else(|_| String::from(DEFAULT_SHIFT_START)),
            default_shift_end: env::var("SHIFTDESK_DEFAULT_SHIFT_END")
                .unwrap_or_else(|_| String::from(DEFAULT_SHIFT_END)),
        };

        if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            config.apply_file(&content)?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Merge overrides from TOML text into this config
    pub fn apply_file(&mut self, content: &str) -> DeskResult<()> {
        let overrides: FileOverrides = toml::from_str(content)?;

        if let Some(timezone) = overrides.timezone {
            self.timezone = timezone;
        }
        if let Some(start) = overrides.default_shift_start {
            self.default_shift_start = start;
        }
        if let Some(end) = overrides.default_shift_end {
            self.default_shift_end = end;
        }

        Ok(())
    }

    /// Check that every value parses
    pub fn validate(&self) -> DeskResult<()> {
        self.tz()?;
        self.default_shift_hours()?;
        Ok(())
    }

    /// Parse the configured time zone
    pub fn tz(&self) -> DeskResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown time zone: {}", self.timezone)))
    }

    /// Default shift hours as `((start_h, start_m), (end_h, end_m))`
    pub fn default_shift_hours(&self) -> DeskResult<((u32, u32), (u32, u32))> {
        let start = parse_time(&self.default_shift_start).ok_or_else(|| {
            config_error(&format!(
                "Invalid default shift start: {}",
                self.default_shift_start
            ))
        })?;
        let end = parse_time(&self.default_shift_end).ok_or_else(|| {
            config_error(&format!(
                "Invalid default shift end: {}",
                self.default_shift_end
            ))
        })?;

        Ok((start, end))
    }
}
