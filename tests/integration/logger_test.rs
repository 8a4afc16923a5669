//! Logger integration tests.

use cmdrun::logger::{ColoredSpan, Level, Logger, MemorySink};
use crossterm::style::Color;
use pretty_assertions::assert_eq;

fn memory_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(sink.clone()), sink)
}

#[test]
fn test_warn_threshold() {
    let (logger, sink) = memory_logger();
    logger.set_level(Level::Warn);

    logger.info("x");
    assert_eq!(sink.contents(), "");

    logger.warn("y");
    assert!(sink.contents().contains('y'));
}

#[test]
fn test_none_silences_errors() {
    let (logger, sink) = memory_logger();
    logger.set_level(Level::None);
    logger.error("nope");
    assert_eq!(sink.contents(), "");

    // Plain writes are not log messages and still go through.
    logger.write_line("raw");
    assert_eq!(sink.contents(), "raw\n");
}

#[test]
fn test_color_writes_always_restore_defaults() {
    let (logger, sink) = memory_logger();
    let colors = [
        (Color::Red, Color::Black),
        (Color::Green, Color::Reset),
        (Color::Rgb { r: 1, g: 2, b: 3 }, Color::White),
    ];
    for (fg, bg) in colors {
        for text in ["", "value", "multi\nline"] {
            logger.write_color(fg, bg, text);
            assert!(sink.is_default_colors());
            logger.write_line_color(fg, bg, text);
            assert!(sink.is_default_colors());
        }
    }
}

#[test]
fn test_tag_colors_follow_table() {
    let (logger, sink) = memory_logger();
    logger.set_level(Level::Trace);
    logger.error("a");
    logger.warn("b");
    logger.info("c");
    logger.debug("d");
    logger.trace("e");

    let tags: Vec<(Color, String)> = sink
        .colored_spans()
        .into_iter()
        .map(|ColoredSpan { foreground, text, .. }| (foreground, text))
        .collect();
    assert_eq!(
        tags,
        vec![
            (Color::Red, "[ERROR] ".to_string()),
            (Color::Yellow, "[WARN] ".to_string()),
            (Color::Green, "[INFO] ".to_string()),
            (Color::Cyan, "[DEBUG] ".to_string()),
            (Color::Grey, "[TRACE] ".to_string()),
        ]
    );
}

#[test]
fn test_timestamps_toggle() {
    let (logger, sink) = memory_logger();
    logger.set_timestamp_enabled(true);
    logger.info("stamped");
    logger.set_timestamp_enabled(false);
    logger.info("plain");

    let lines = sink.lines();
    assert!(lines[0].ends_with("[INFO] stamped"));
    assert!(lines[0].len() > "[INFO] stamped".len());
    assert!(lines[0].as_bytes()[0].is_ascii_digit());
    assert_eq!(lines[1], "[INFO] plain");
}
