use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Day weeks start on, by English name or two-letter code.
    pub week_start: String,
    pub override_past_days: i64,
    pub override_future_days: i64,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured week start to a weekday index (Monday=0 … Sunday=6).
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the value does not name a weekday.
    pub fn week_start_index(&self) -> CoreResult<u8> {
        const NAMES: [(&str, &str); 7] = [
            ("monday", "mo"),
            ("tuesday", "tu"),
            ("wednesday", "we"),
            ("thursday", "th"),
            ("friday", "fr"),
            ("saturday", "sa"),
            ("sunday", "su"),
        ];
        let wanted = self.week_start.trim().to_ascii_lowercase();
        NAMES
            .iter()
            .zip(0u8..)
            .find(|((long, short), _)| wanted == *long || wanted == *short)
            .map(|(_, index)| index)
            .ok_or_else(|| {
                CoreError::ConfigError(format!("unknown week start '{}'", self.week_start))
            })
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `cadence.toml` into a `Settings`.
    ///
    /// Environment variables use the `CADENCE__SECTION__KEY` form.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("calendar.week_start", "monday")?
            .set_default(
                "calendar.override_past_days",
                crate::constants::DEFAULT_OVERRIDE_PAST_DAYS,
            )?
            .set_default(
                "calendar.override_future_days",
                crate::constants::DEFAULT_OVERRIDE_FUTURE_DAYS,
            )?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
