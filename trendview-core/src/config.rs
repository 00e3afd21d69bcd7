//! Dashboard configuration, stored as TOML.
//!
//! Every section and key has a default, so an empty file (or no file at all)
//! yields a working dashboard.
//!
//! ```toml
//! [pipeline]
//! length = 121
//! window = 14
//! horizon_months = 6
//!
//! [dashboard]
//! default_symbol = "AAPL"
//! watchlist = ["AAPL", "MSFT"]
//! refresh_secs = 30
//! seed = 42
//! max_messages = 200
//!
//! [logging]
//! file = "/tmp/trendview.log"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forecast::DEFAULT_HORIZON_MONTHS;
use crate::generator::DEFAULT_LENGTH;
use crate::smoothing::DEFAULT_WINDOW;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Sizes for the three pipeline stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of daily points, today included.
    pub length: usize,
    /// Moving-average window in points.
    pub window: usize,
    /// Forecast horizon in calendar months.
    pub horizon_months: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            window: DEFAULT_WINDOW,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub default_symbol: String,
    pub watchlist: Vec<String>,
    /// Seconds between automatic refreshes; 0 disables the timer.
    pub refresh_secs: u64,
    /// Master seed. Absent means a fresh entropy source per session.
    pub seed: Option<u64>,
    /// Message log capacity; the oldest messages are dropped first.
    pub max_messages: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_symbol: "AAPL".into(),
            watchlist: ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]
                .into_iter()
                .map(String::from)
                .collect(),
            refresh_secs: 30,
            seed: None,
            max_messages: 200,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file for the terminal dashboard. Defaults to the temp dir.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn file_or_default(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("trendview.log"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub pipeline: PipelineConfig,
    pub dashboard: DashboardSettings,
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Without one, the user config dir is
    /// tried (`<config_dir>/trendview/config.toml`) and defaults are used
    /// when nothing is there.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pipeline;
        for (name, value) in [
            ("pipeline.length", p.length),
            ("pipeline.window", p.window),
            ("pipeline.horizon_months", p.horizon_months),
            ("dashboard.max_messages", self.dashboard.max_messages),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
            }
        }
        if self.dashboard.default_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dashboard.default_symbol must not be empty".into(),
            ));
        }
        if let Some(blank) = self.dashboard.watchlist.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "dashboard.watchlist[{blank}] must not be empty"
            )));
        }
        Ok(())
    }
}

/// `<config_dir>/trendview/config.toml`, when the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trendview").join("config.toml"))
}
