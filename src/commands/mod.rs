//! Command registration and dispatch for cmdrun.
//!
//! Commands are registered explicitly by start-up code, then the dispatcher
//! maps the first process argument to a handler and runs it with the rest.

pub mod definitions;
pub mod dispatcher;
pub mod handlers;
pub mod help;
pub mod registry;

pub use definitions::{CommandDef, HELP_COMMAND};
pub use dispatcher::{Dispatched, Dispatcher};
pub use registry::{handler, CommandRegistry, Handler};
