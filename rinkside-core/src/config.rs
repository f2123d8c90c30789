//! rinkside configuration.

use std::path::{Path, PathBuf};

use chrono::Duration;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{RinksideError, RinksideResult};
use crate::feed::DEFAULT_WINDOW_HOURS;
use crate::query::SortBy;

static DEFAULT_FEED_PATH: &str = "~/rinkside/events.json";

fn default_feed_path() -> PathBuf {
    PathBuf::from(DEFAULT_FEED_PATH)
}

fn default_upcoming_hours() -> i64 {
    DEFAULT_WINDOW_HOURS
}

/// Configuration at ~/.config/rinkside/config.toml
///
/// Any value can be overridden from the environment with a `RINKSIDE_`
/// prefix (e.g. `RINKSIDE_FEED`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RinksideConfig {
    /// Events JSON file, as served by the events endpoint.
    #[serde(default = "default_feed_path")]
    pub feed: PathBuf,

    #[serde(default)]
    pub default_sort: SortBy,

    /// Look-ahead used by `--upcoming`.
    #[serde(default = "default_upcoming_hours")]
    pub upcoming_hours: i64,
}

impl Default for RinksideConfig {
    fn default() -> Self {
        RinksideConfig {
            feed: default_feed_path(),
            default_sort: SortBy::default(),
            upcoming_hours: default_upcoming_hours(),
        }
    }
}

impl RinksideConfig {
    pub fn config_path() -> RinksideResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RinksideError::Config("Could not determine config directory".into()))?
            .join("rinkside");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file first if
    /// there isn't one yet.
    pub fn load() -> RinksideResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("RINKSIDE").try_parsing(true))
            .build()
            .map_err(|e| RinksideError::Config(e.to_string()))?
            .try_deserialize::<Self>()
            .map_err(|e| RinksideError::Config(e.to_string()))?
            .validated()
    }

    /// Load config from a specific file, without environment overrides.
    pub fn load_from(path: &Path) -> RinksideResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| RinksideError::Config(e.to_string()))?
            .try_deserialize::<Self>()
            .map_err(|e| RinksideError::Config(e.to_string()))?
            .validated()
    }

    fn validated(self) -> RinksideResult<Self> {
        if self.upcoming_hours < 0 {
            return Err(RinksideError::Config(format!(
                "upcoming_hours must not be negative (got {})",
                self.upcoming_hours
            )));
        }
        Ok(self)
    }

    /// Write this config to `path`, replacing the commented default file.
    pub fn save_to(&self, path: &Path) -> RinksideResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RinksideError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| RinksideError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Feed path with `~` expanded.
    pub fn feed_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.feed.to_string_lossy()).into_owned())
    }

    /// Look-ahead for `--upcoming`, saturating at the largest duration.
    pub fn upcoming_window(&self) -> Duration {
        Duration::try_hours(self.upcoming_hours).unwrap_or(Duration::MAX)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RinksideResult<()> {
        let contents = format!(
            "\
# rinkside configuration

# Events JSON file to read:
# feed = \"{}\"

# Default ordering (time, cost-asc or cost-desc):
# default_sort = \"time\"

# Hours ahead shown by --upcoming:
# upcoming_hours = {}
",
            DEFAULT_FEED_PATH, DEFAULT_WINDOW_HOURS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RinksideError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RinksideError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
