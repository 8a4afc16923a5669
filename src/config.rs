//! Configuration management for cmdrun.
//!
//! Loads logger settings from a TOML file and lets environment variables and
//! command-line flags override them. Precedence, highest first: CLI flags,
//! environment, config file, built-in defaults.

use crate::error::{CmdrunError, Result};
use crate::logger::{parse_color, ColorMode, Level, LevelColors, Logger};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CMDRUN_LOG_LEVEL";

/// Environment variable toggling timestamps.
pub const ENV_LOG_TIMESTAMPS: &str = "CMDRUN_LOG_TIMESTAMPS";

/// Main configuration structure for cmdrun.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Logger settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Logger configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Minimum severity to emit.
    #[serde(default)]
    pub level: Level,

    /// Prefix each log message with the local time.
    #[serde(default)]
    pub timestamps: bool,

    /// When to emit ANSI colors.
    #[serde(default)]
    pub color: ColorMode,

    /// Per-level tag colors.
    #[serde(default)]
    pub colors: ColorOverrides,
}

/// Color names overriding the default level colors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub error: Option<String>,
    pub warn: Option<String>,
    pub info: Option<String>,
    pub debug: Option<String>,
    pub trace: Option<String>,
}

impl ColorOverrides {
    /// Applies the overrides on top of `base`.
    pub fn resolve(&self, base: LevelColors) -> Result<LevelColors> {
        let mut colors = base;
        let overrides = [
            (Level::Error, &self.error),
            (Level::Warn, &self.warn),
            (Level::Info, &self.info),
            (Level::Debug, &self.debug),
            (Level::Trace, &self.trace),
        ];
        for (level, name) in overrides {
            if let Some(name) = name {
                let color = parse_color(name).ok_or_else(|| {
                    CmdrunError::config(format!("Unknown color '{name}' for level {level}"))
                })?;
                colors.set(level, color);
            }
        }
        Ok(colors)
    }
}

impl LogConfig {
    /// Applies `CMDRUN_LOG_LEVEL` and `CMDRUN_LOG_TIMESTAMPS` from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` to read variables.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.level = level
                .parse()
                .map_err(|e| CmdrunError::config(format!("{ENV_LOG_LEVEL}: {e}")))?;
        }
        if let Some(flag) = lookup(ENV_LOG_TIMESTAMPS) {
            self.timestamps = parse_bool(&flag).ok_or_else(|| {
                CmdrunError::config(format!(
                    "{ENV_LOG_TIMESTAMPS}: expected true or false, got '{flag}'"
                ))
            })?;
        }
        Ok(())
    }

    /// Configures `logger` from these settings.
    pub fn apply_to(&self, logger: &Logger) -> Result<()> {
        let colors = self.colors.resolve(LevelColors::default())?;
        logger.set_level(self.level);
        logger.set_timestamp_enabled(self.timestamps);
        logger.set_level_colors(colors);
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmdrun")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CmdrunError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            CmdrunError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
