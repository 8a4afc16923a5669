//! Arithmetic commands.

use anyhow::{anyhow, Context};

use crate::logger::Logger;

/// Handle `sum`: add integer arguments and print the total.
pub fn handle_sum(logger: &Logger, args: &[String]) -> anyhow::Result<()> {
    let mut total: i64 = 0;
    for arg in args {
        let value: i64 = arg
            .parse()
            .with_context(|| format!("'{arg}' is not an integer"))?;
        total = total
            .checked_add(value)
            .ok_or_else(|| anyhow!("sum overflows a 64-bit integer"))?;
    }
    logger.debug(format_args!("summed {} values", args.len()));
    logger.write_line(total);
    Ok(())
}
