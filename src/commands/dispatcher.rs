//! Argument dispatch.
//!
//! The dispatcher treats the first process argument as a command name, looks
//! it up in the registry and calls the handler with the remaining arguments.
//! Every expected failure (unknown command, failing or panicking handler) is
//! caught here and reported through the logger; nothing escapes [`Dispatcher::run`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::definitions::{CommandDef, HELP_COMMAND};
use super::help;
use super::registry::{CommandRegistry, Handler};
use crate::error::{CmdrunError, Result};
use crate::logger::Logger;

type Populate = Box<dyn FnOnce(&mut CommandRegistry) -> Result<()> + Send>;

/// Outcome of a dispatch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// The handler ran and returned `Ok`.
    Completed,
    /// No command was given (or `help` was), so the listing was printed.
    Help,
}

/// Routes process arguments to registered handlers.
///
/// The registry can be filled up front ([`Dispatcher::with_registry`]) or
/// lazily by a routine passed to [`Dispatcher::on_first_run`], which runs
/// exactly once even when several threads dispatch concurrently.
pub struct Dispatcher {
    registry: RwLock<CommandRegistry>,
    populate: Mutex<Option<Populate>>,
    populated: OnceLock<Result<()>>,
    logger: Arc<Logger>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self::with_registry(CommandRegistry::new(), logger)
    }

    /// Creates a dispatcher over an already populated registry.
    pub fn with_registry(registry: CommandRegistry, logger: Arc<Logger>) -> Self {
        Self {
            registry: RwLock::new(registry),
            populate: Mutex::new(None),
            populated: OnceLock::new(),
            logger,
        }
    }

    /// Sets the routine that fills the registry before the first dispatch.
    ///
    /// Commands registered directly beforehand keep priority over commands of
    /// the same name added by the routine.
    pub fn on_first_run<F>(self, populate: F) -> Self
    where
        F: FnOnce(&mut CommandRegistry) -> Result<()> + Send + 'static,
    {
        *self.populate.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(populate));
        self
    }

    /// Runs the populate routine if it has not run yet.
    ///
    /// Concurrent callers block until the first one finishes, so no thread
    /// sees a partially filled registry. A registration error is returned to
    /// every caller. If the routine panics the registry is emptied and the
    /// failure is kept like any other error.
    pub fn ensure_populated(&self) -> Result<()> {
        self.populated
            .get_or_init(|| {
                let populate = self
                    .populate
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                let Some(populate) = populate else {
                    return Ok(());
                };
                let mut registry = self.write_registry();
                let result = panic::catch_unwind(AssertUnwindSafe(|| populate(&mut *registry)))
                    .unwrap_or_else(|payload| {
                        registry.clear();
                        Err(CmdrunError::invalid_command(format!(
                            "populate routine panicked: {}",
                            panic_message(payload.as_ref())
                        )))
                    });
                debug!(commands = registry.len(), "command registry populated");
                result
            })
            .clone()
    }

    /// Read access to the registry.
    pub fn registry(&self) -> RwLockReadGuard<'_, CommandRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, CommandRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a command. See [`CommandRegistry::register`].
    pub fn register(&self, def: CommandDef, handler: Handler) -> Result<bool> {
        self.write_registry().register(def, handler)
    }

    /// Removes every command. Invocations already in progress are unaffected.
    pub fn clear(&self) {
        self.write_registry().clear();
    }

    /// Prints the help listing.
    pub fn render_help(&self) {
        help::render_help(&self.registry(), &self.logger);
    }

    /// Dispatches `args` and reports any failure.
    ///
    /// Returns `true` only when a handler ran and succeeded. An empty
    /// argument list or `help` prints the listing and returns `false`.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> bool {
        match self.dispatch(args) {
            Ok(Dispatched::Completed) => true,
            Ok(Dispatched::Help) => false,
            Err(err) => {
                debug!(category = err.category(), "dispatch failed: {err}");
                help::report_error(&err, &self.logger);
                false
            }
        }
    }

    /// Dispatches `args` and returns the failure instead of reporting it.
    ///
    /// The help listing is still printed when no command is given.
    pub fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Result<Dispatched> {
        self.ensure_populated()?;

        let Some((name, rest)) = args.split_first() else {
            self.render_help();
            return Ok(Dispatched::Help);
        };
        let name = name.as_ref();
        if name == HELP_COMMAND {
            self.render_help();
            return Ok(Dispatched::Help);
        }

        // The lock is released before the handler runs so handlers may
        // register or clear commands themselves.
        let handler = self
            .registry()
            .lookup(name)
            .cloned()
            .ok_or_else(|| CmdrunError::command_not_found(name))?;

        let args: Vec<String> = rest.iter().map(|a| a.as_ref().to_string()).collect();
        debug!(command = name, args = args.len(), "dispatching command");
        invoke(&handler, &args)?;
        Ok(Dispatched::Completed)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &*self.registry())
            .field("populated", &self.populated.get().is_some())
            .finish()
    }
}

/// Calls the handler, turning both `Err` and panics into `HandlerFailed`.
fn invoke(handler: &Handler, args: &[String]) -> Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(|| handler(args))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(CmdrunError::handler_failed(format!("{err:#}"))),
        Err(payload) => Err(CmdrunError::handler_failed(format!(
            "command panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
