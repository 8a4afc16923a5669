//! Command descriptors.
//!
//! A descriptor identifies a command by name and carries a help description.
//! Equality and hashing use the name only, so a registry keyed on descriptors
//! behaves as a set of names.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CmdrunError, Result};

/// Reserved word that always renders the help listing. It can never be
/// registered as a command.
pub const HELP_COMMAND: &str = "help";

/// Name and description of a registrable command.
#[derive(Debug, Clone, Eq)]
pub struct CommandDef {
    name: String,
    description: String,
}

impl CommandDef {
    /// Creates a descriptor. Names are case-sensitive.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Creates a descriptor with an empty description.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// The name used to invoke the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line summary shown in the help listing.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks that the name can be dispatched: non-empty, a single token,
    /// and not the reserved `help` word.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CmdrunError::invalid_command("command name must not be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(CmdrunError::invalid_command(format!(
                "command name '{}' must not contain whitespace",
                self.name
            )));
        }
        if self.name == HELP_COMMAND {
            return Err(CmdrunError::invalid_command(format!(
                "'{HELP_COMMAND}' is reserved for the help listing"
            )));
        }
        Ok(())
    }
}

impl PartialEq for CommandDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for CommandDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for CommandDef {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} - {}", self.name, self.description)
        }
    }
}
