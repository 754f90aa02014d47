use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{ALLOW_EMPTY_TIME_KEY, CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `[interval]` section
    pub interval: IntervalConfig,
}

/// Parser behaviour for ISO 8601 durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IntervalConfig {
    /// Accept a time designator with nothing after it (`P1YT`, `PT`).
    ///
    /// Some database emitters produce these loosely; they parse as if the
    /// `T` were absent.
    pub allow_empty_time: bool,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            allow_empty_time: true,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a config builder with every default already set, so callers
    /// can layer their own sources on top.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = IntervalConfig::default();
        Ok(Config::builder().set_default(ALLOW_EMPTY_TIME_KEY, defaults.allow_empty_time)?)
    }

    /// ## Summary
    /// Builds and deserializes a `Settings` from the given builder.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from the optional `nullval.toml` file and
    /// environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let builder = Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env, e.g. NULLVAL__INTERVAL__ALLOW_EMPTY_TIME=false
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            );

        let settings = Self::from_builder(builder)?;
        tracing::debug!(
            allow_empty_time = settings.interval.allow_empty_time,
            "Loaded nullval settings"
        );
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
