//! Command registry.
//!
//! Maps command descriptors to handlers. Registration is explicit: start-up
//! code calls [`CommandRegistry::register`] (or [`CommandRegistry::command`])
//! once per command before the first dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::definitions::CommandDef;
use crate::error::Result;

/// Routine invoked for a command with the arguments that follow its name.
pub type Handler = Arc<dyn Fn(&[String]) -> anyhow::Result<()> + Send + Sync>;

/// Wraps a closure or function into a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&[String]) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A registered command.
#[derive(Clone)]
struct Entry {
    def: CommandDef,
    handler: Handler,
}

/// Name-keyed set of commands.
///
/// Iteration follows insertion order, not alphabetical order.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command.
    ///
    /// Returns `Ok(true)` when the command was added and `Ok(false)` when a
    /// command with the same name already exists; the first registration
    /// wins and the new handler is dropped. Invalid names are an error.
    pub fn register(&mut self, def: CommandDef, handler: Handler) -> Result<bool> {
        def.validate()?;

        if self.index.contains_key(def.name()) {
            debug!(command = def.name(), "ignoring duplicate command registration");
            return Ok(false);
        }

        self.index.insert(def.name().to_string(), self.entries.len());
        self.entries.push(Entry { def, handler });
        Ok(true)
    }

    /// Registers a closure as the handler for `name`.
    pub fn command<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        f: F,
    ) -> Result<bool>
    where
        F: Fn(&[String]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(CommandDef::new(name, description), handler(f))
    }

    /// Finds the handler for an exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<&Handler> {
        self.index.get(name).map(|&i| &self.entries[i].handler)
    }

    /// Finds the descriptor for an exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&CommandDef> {
        self.index.get(name).map(|&i| &self.entries[i].def)
    }

    /// Returns true if a command named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All commands in registration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&CommandDef, &Handler)> {
        self.entries.iter().map(|e| (&e.def, &e.handler))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every command. Handlers already handed out keep running.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.def.name()))
            .finish()
    }
}
