//! General commands (echo, levels, version).

use anyhow::bail;

use crate::logger::{Level, Logger};

/// Handle `echo`: print the arguments joined by single spaces.
pub fn handle_echo(logger: &Logger, args: &[String]) -> anyhow::Result<()> {
    logger.write_line(args.join(" "));
    Ok(())
}

/// Handle `levels`: emit one message per level so the current filter is visible.
pub fn handle_levels(logger: &Logger, args: &[String]) -> anyhow::Result<()> {
    if !args.is_empty() {
        bail!("levels takes no arguments");
    }

    logger.write_line(format_args!("Current level: {}", logger.level()));
    for level in Level::ALL.into_iter().skip(1) {
        logger.log(level, format_args!("sample {} message", level.name().to_lowercase()));
    }
    Ok(())
}

/// Handle `version`.
pub fn handle_version(logger: &Logger, _args: &[String]) -> anyhow::Result<()> {
    logger.write_line(format_args!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}
