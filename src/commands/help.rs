//! Help listing and error reporting for the dispatcher.

use crossterm::style::Color;

use super::registry::CommandRegistry;
use crate::error::CmdrunError;
use crate::logger::Logger;

/// First line of the help listing.
pub const HELP_HEADER: &str = "Available commands:";

/// Printed instead of the listing when nothing is registered.
pub const NONE_AVAILABLE: &str = "None available";

/// Tag printed before dispatcher errors.
pub const ERROR_TAG: &str = "[ERROR]";

/// Prints every registered command with its description, in registration order.
pub fn render_help(registry: &CommandRegistry, logger: &Logger) {
    logger.write_line_color(Color::Yellow, Color::Reset, HELP_HEADER);

    if registry.is_empty() {
        logger.write_line(NONE_AVAILABLE);
        return;
    }

    for (def, _) in registry.entries() {
        logger.write_line_prefixed(
            Color::Green,
            def.name(),
            format_args!(" - {}", def.description()),
        );
    }
}

/// Prints `[ERROR]: <message>` on one line. Not gated by the log level.
pub fn report_error(err: &CmdrunError, logger: &Logger) {
    logger.write_line_prefixed(Color::Red, ERROR_TAG, format_args!(": {err}"));
}
