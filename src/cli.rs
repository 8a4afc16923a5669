//! Command-line argument parsing for cmdrun.
//!
//! clap only handles the global options. Everything from the first positional
//! argument on is passed untouched to the dispatcher.

use clap::Parser;
use cmdrun::config::{Config, LogConfig};
use cmdrun::error::{CmdrunError, Result};
use cmdrun::logger::{ColorMode, Level};
use std::path::PathBuf;

/// Run a registered command: cmdrun [OPTIONS] [COMMAND [ARGS...]]
#[derive(Parser, Debug)]
#[command(name = "cmdrun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: None, Error, Warn, Info, Debug or Trace
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Prefix log messages with the local time
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// When to use colors: auto, always or never
    #[arg(long, value_name = "MODE")]
    pub color: Option<String>,

    /// Command name followed by its arguments ("help" lists commands)
    #[arg(value_name = "COMMAND", num_args = 1.., trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Parses the --log-level argument.
    pub fn parse_log_level(&self) -> std::result::Result<Option<Level>, String> {
        self.log_level.as_deref().map(str::parse).transpose()
    }

    /// Parses the --color argument.
    pub fn parse_color_mode(&self) -> std::result::Result<Option<ColorMode>, String> {
        self.color.as_deref().map(str::parse).transpose()
    }

    /// Applies flags on top of file and environment settings.
    pub fn apply_overrides(&self, log: &mut LogConfig) -> Result<()> {
        if let Some(level) = self.parse_log_level().map_err(CmdrunError::config)? {
            log.level = level;
        }
        if let Some(color) = self.parse_color_mode().map_err(CmdrunError::config)? {
            log.color = color;
        }
        if self.timestamps {
            log.timestamps = true;
        }
        Ok(())
    }
}
