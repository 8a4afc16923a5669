//! Built-in commands shipped with the `cmdrun` binary.
//!
//! Each handler is a plain function taking the logger and its arguments;
//! [`register_builtins`] wraps them into registry handlers.

pub mod math;
pub mod system;

use std::sync::Arc;

use super::registry::CommandRegistry;
use crate::error::Result;
use crate::logger::Logger;

/// Registers the built-in commands in display order.
pub fn register_builtins(registry: &mut CommandRegistry, logger: Arc<Logger>) -> Result<()> {
    let log = Arc::clone(&logger);
    registry.command("echo", "Print the arguments separated by spaces", move |args| {
        system::handle_echo(&log, args)
    })?;

    let log = Arc::clone(&logger);
    registry.command("sum", "Add up integer arguments", move |args| {
        math::handle_sum(&log, args)
    })?;

    let log = Arc::clone(&logger);
    registry.command("levels", "Emit a sample message at every log level", move |args| {
        system::handle_levels(&log, args)
    })?;

    registry.command("version", "Show the program version", move |args| {
        system::handle_version(&logger, args)
    })?;

    Ok(())
}
