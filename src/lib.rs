//! cmdrun - A command registry and dispatcher with leveled console logging.
//!
//! Register commands on a [`CommandRegistry`], hand it to a [`Dispatcher`],
//! and call [`Dispatcher::run`] with the process arguments. Output goes
//! through a [`Logger`], which also serves as the application's leveled,
//! colorized console logger.

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use commands::{handler, CommandDef, CommandRegistry, Dispatched, Dispatcher, Handler};
pub use error::{CmdrunError, Result};
pub use logger::{ColorMode, Level, Logger};
