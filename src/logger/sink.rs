//! Terminal output sinks.
//!
//! A sink receives plain text and foreground/background color changes. The
//! console sink drives a real terminal through crossterm; the memory sink
//! records everything for tests and for embedders that want to capture output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

/// Destination for logger output.
pub trait Sink: Send {
    /// Writes text using the current color attributes.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Sets the foreground and background colors for subsequent writes.
    fn set_colors(&mut self, foreground: Color, background: Color) -> io::Result<()>;

    /// Restores the default colors.
    fn reset_colors(&mut self) -> io::Result<()>;

    /// Flushes buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Holds a color change on a sink and resets it when dropped.
///
/// The reset runs on every exit path, including early returns from a failed
/// write and unwinding out of a `Display` impl.
pub struct ColorScope<'a> {
    sink: &'a mut dyn Sink,
}

impl<'a> ColorScope<'a> {
    /// Applies the colors and returns the guard.
    pub fn acquire(sink: &'a mut dyn Sink, foreground: Color, background: Color) -> Self {
        let _ = sink.set_colors(foreground, background);
        Self { sink }
    }

    /// Writes text in the scoped colors.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.sink.write_str(text)
    }
}

impl Drop for ColorScope<'_> {
    fn drop(&mut self) {
        let _ = self.sink.reset_colors();
    }
}

/// Sink writing to a terminal (stdout by default) with ANSI color sequences.
pub struct ConsoleSink<W: Write + Send = io::Stdout> {
    out: W,
    ansi: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink on stdout.
    pub fn stdout(ansi: bool) -> Self {
        Self::new(io::stdout(), ansi)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Creates a sink on an arbitrary writer.
    ///
    /// With `ansi` off, color changes are ignored and only text is written.
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn set_colors(&mut self, foreground: Color, background: Color) -> io::Result<()> {
        if !self.ansi {
            return Ok(());
        }
        queue!(
            self.out,
            SetForegroundColor(foreground),
            SetBackgroundColor(background)
        )
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        if !self.ansi {
            return Ok(());
        }
        queue!(self.out, ResetColor)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// A run of text written while non-default colors were active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredSpan {
    pub foreground: Color,
    pub background: Color,
    pub text: String,
}

#[derive(Debug)]
struct MemoryState {
    text: String,
    spans: Vec<ColoredSpan>,
    foreground: Color,
    background: Color,
    fail_writes: bool,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
            foreground: Color::Reset,
            background: Color::Reset,
            fail_writes: false,
        }
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    /// Creates an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Everything written so far, without color information.
    pub fn contents(&self) -> String {
        self.with_state(|s| s.text.clone())
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Text written while a non-default color was active, in write order.
    pub fn colored_spans(&self) -> Vec<ColoredSpan> {
        self.with_state(|s| s.spans.clone())
    }

    /// Current (foreground, background) attributes.
    pub fn colors(&self) -> (Color, Color) {
        self.with_state(|s| (s.foreground, s.background))
    }

    /// True when no color change is in effect.
    pub fn is_default_colors(&self) -> bool {
        self.colors() == (Color::Reset, Color::Reset)
    }

    /// Makes every subsequent text write fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.with_state(|s| s.fail_writes = fail);
    }

    /// Discards recorded output. Color state is left untouched.
    pub fn clear(&self) {
        self.with_state(|s| {
            s.text.clear();
            s.spans.clear();
        });
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.with_state(|s| {
            if s.fail_writes {
                return Err(io::Error::other("sink write failed"));
            }
            s.text.push_str(text);
            if (s.foreground, s.background) != (Color::Reset, Color::Reset) && !text.is_empty() {
                s.spans.push(ColoredSpan {
                    foreground: s.foreground,
                    background: s.background,
                    text: text.to_string(),
                });
            }
            Ok(())
        })
    }

    fn set_colors(&mut self, foreground: Color, background: Color) -> io::Result<()> {
        self.with_state(|s| {
            s.foreground = foreground;
            s.background = background;
        });
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        self.with_state(|s| {
            s.foreground = Color::Reset;
            s.background = Color::Reset;
        });
        Ok(())
    }
}
