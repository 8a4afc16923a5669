//! Log severity levels and their default colors.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use serde::{Deserialize, Deserializer};

/// Severity threshold for the logger.
///
/// Levels are totally ordered: `None < Error < Warn < Info < Debug < Trace`.
/// A message at severity `S` is emitted when the configured level is `>= S`,
/// so `None` silences everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    None = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 6] = [
        Level::None,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Canonical name, as accepted in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Error => "Error",
            Self::Warn => "Warn",
            Self::Info => "Info",
            Self::Debug => "Debug",
            Self::Trace => "Trace",
        }
    }

    /// Bracketed tag printed before a message, including the trailing space.
    ///
    /// `None` has no tag because nothing is ever logged at that level.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some("[ERROR] "),
            Self::Warn => Some("[WARN] "),
            Self::Info => Some("[INFO] "),
            Self::Debug => Some("[DEBUG] "),
            Self::Trace => Some("[TRACE] "),
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid log level: {s}. Expected: None, Error, Warn, Info, Debug, or Trace"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Color used for each level's tag.
///
/// Debug has shipped as both cyan and white; cyan is the default here and
/// either can be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColors {
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
    pub trace: Color,
}

impl LevelColors {
    /// Returns the tag color for a level. `None` maps to the terminal default.
    pub fn for_level(&self, level: Level) -> Color {
        match level {
            Level::None => Color::Reset,
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }

    /// Replaces the color for a single level.
    pub fn set(&mut self, level: Level, color: Color) {
        match level {
            Level::None => {}
            Level::Error => self.error = color,
            Level::Warn => self.warn = color,
            Level::Info => self.info = color,
            Level::Debug => self.debug = color,
            Level::Trace => self.trace = color,
        }
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Self {
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Cyan,
            trace: Color::Grey,
        }
    }
}

/// Parses a color name such as `"red"`, `"dark_grey"` or `"reset"`.
pub fn parse_color(name: &str) -> Option<Color> {
    let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
    let color = match normalized.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return None,
    };
    Some(color)
}
