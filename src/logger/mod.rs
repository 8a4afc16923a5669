//! Leveled, colorized console logger.
//!
//! The logger gates messages by severity, optionally prefixes a timestamp, and
//! renders a colored level tag before each message. It also offers ungated
//! plain and colored writes for output that is not a log message (help
//! listings, command results).
//!
//! All operations are synchronous writes to a [`Sink`]. The sink sits behind a
//! mutex so that each set-color / write / reset sequence is atomic with
//! respect to other threads. The logger never fails: filtered messages are
//! dropped and sink I/O errors are ignored.

mod level;
mod sink;

use std::fmt;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use crossterm::style::Color;
use serde::Deserialize;

pub use level::{parse_color, Level, LevelColors};
pub use sink::{ColorScope, ColoredSpan, ConsoleSink, MemorySink, Sink};

/// Timestamp layout used when timestamps are enabled. Sorts lexically.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// When to emit ANSI color sequences on the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current stdout.
    pub fn use_ansi(&self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!(
                "Invalid color mode: {s}. Expected: auto, always, or never"
            )),
        }
    }
}

/// Severity-filtered message emitter.
pub struct Logger {
    sink: Mutex<Box<dyn Sink>>,
    level: AtomicU8,
    timestamps: AtomicBool,
    colors: RwLock<LevelColors>,
}

impl Logger {
    /// Creates a logger on the given sink with level `Info` and no timestamps.
    pub fn new(sink: impl Sink + 'static) -> Self {
        let sink: Box<dyn Sink> = Box::new(sink);
        Self {
            sink: Mutex::new(sink),
            level: AtomicU8::new(Level::default() as u8),
            timestamps: AtomicBool::new(false),
            colors: RwLock::new(LevelColors::default()),
        }
    }

    /// Creates a logger on stdout.
    pub fn console(mode: ColorMode) -> Self {
        Self::new(ConsoleSink::stdout(mode.use_ansi()))
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Sets the threshold. Messages finer than `level` are dropped, not deferred.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Returns true if messages are prefixed with the local time.
    pub fn timestamp_enabled(&self) -> bool {
        self.timestamps.load(Ordering::Relaxed)
    }

    /// Turns the timestamp prefix on or off.
    pub fn set_timestamp_enabled(&self, enabled: bool) {
        self.timestamps.store(enabled, Ordering::Relaxed);
    }

    /// Returns the current level-to-color table.
    pub fn level_colors(&self) -> LevelColors {
        *self.colors.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the level-to-color table.
    pub fn set_level_colors(&self, colors: LevelColors) {
        *self.colors.write().unwrap_or_else(PoisonError::into_inner) = colors;
    }

    /// Overrides the tag color of a single level.
    pub fn set_level_color(&self, level: Level, color: Color) {
        self.colors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(level, color);
    }

    /// Returns true if a message at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::None && self.level() >= level
    }

    /// Emits `message` at `level` if the threshold allows it.
    ///
    /// Output is `[timestamp ]<colored tag><message>\n`.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let Some(tag) = level.tag() else {
            return;
        };

        let text = message.to_string();
        let timestamp = self
            .timestamp_enabled()
            .then(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
        let color = self.level_colors().for_level(level);

        let mut sink = self.lock_sink();
        if let Some(timestamp) = timestamp {
            let _ = sink.write_str(&timestamp);
            let _ = sink.write_str(" ");
        }
        {
            let mut scope = ColorScope::acquire(&mut **sink, color, Color::Reset);
            let _ = scope.write_str(tag);
        }
        let _ = sink.write_str(&text);
        let _ = sink.write_str("\n");
        let _ = sink.flush();
    }

    /// Logs at `Error`.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Logs at `Warn`.
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    /// Logs at `Info`.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    /// Logs at `Debug`.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    /// Logs at `Trace`.
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }

    /// Writes `message` without a line break, regardless of level.
    pub fn write(&self, message: impl fmt::Display) {
        let text = message.to_string();
        let mut sink = self.lock_sink();
        let _ = sink.write_str(&text);
        let _ = sink.flush();
    }

    /// Writes `message` followed by a line break, regardless of level.
    pub fn write_line(&self, message: impl fmt::Display) {
        let text = message.to_string();
        let mut sink = self.lock_sink();
        let _ = sink.write_str(&text);
        let _ = sink.write_str("\n");
        let _ = sink.flush();
    }

    /// Writes `message` in the given colors, then restores the defaults.
    pub fn write_color(&self, foreground: Color, background: Color, message: impl fmt::Display) {
        let text = message.to_string();
        let mut sink = self.lock_sink();
        {
            let mut scope = ColorScope::acquire(&mut **sink, foreground, background);
            let _ = scope.write_str(&text);
        }
        let _ = sink.flush();
    }

    /// Like [`Logger::write_color`] with a trailing line break.
    ///
    /// The break is written after the reset so a background color does not
    /// bleed into the rest of the terminal line.
    pub fn write_line_color(
        &self,
        foreground: Color,
        background: Color,
        message: impl fmt::Display,
    ) {
        let text = message.to_string();
        let mut sink = self.lock_sink();
        {
            let mut scope = ColorScope::acquire(&mut **sink, foreground, background);
            let _ = scope.write_str(&text);
        }
        let _ = sink.write_str("\n");
        let _ = sink.flush();
    }

    /// Writes a colored `prefix` and then `message` in the default colors as
    /// one line. Other writers cannot split the line.
    pub fn write_line_prefixed(
        &self,
        foreground: Color,
        prefix: impl fmt::Display,
        message: impl fmt::Display,
    ) {
        let prefix = prefix.to_string();
        let text = message.to_string();
        let mut sink = self.lock_sink();
        {
            let mut scope = ColorScope::acquire(&mut **sink, foreground, Color::Reset);
            let _ = scope.write_str(&prefix);
        }
        let _ = sink.write_str(&text);
        let _ = sink.write_str("\n");
        let _ = sink.flush();
    }

    /// Locks the sink. A panic in another writer leaves the sink usable.
    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn Sink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::console(ColorMode::Auto)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("timestamps", &self.timestamp_enabled())
            .finish_non_exhaustive()
    }
}
