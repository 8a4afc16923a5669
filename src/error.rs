//! Error types for cmdrun.
//!
//! Only `CommandNotFound` and `HandlerFailed` are expected at runtime; the
//! dispatcher resolves both before `run` returns. The remaining variants are
//! raised during start-up and indicate a bug or a broken configuration.

use thiserror::Error;

/// Main error type for cmdrun operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmdrunError {
    /// The first argument did not name a registered command.
    #[error("Command '{name}' does not exist")]
    CommandNotFound {
        /// The name the user attempted to run.
        name: String,
    },

    /// The handler ran and reported a failure (or panicked).
    #[error("{message}")]
    HandlerFailed {
        /// Human-readable failure message from the handler.
        message: String,
    },

    /// A command could not be registered (empty, reserved or malformed name).
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration errors (unreadable file, bad TOML, unknown level name, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CmdrunError {
    /// Creates a command-not-found error for the given name.
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    /// Creates a handler failure with the given message.
    pub fn handler_failed(message: impl Into<String>) -> Self {
        Self::HandlerFailed {
            message: message.into(),
        }
    }

    /// Creates an invalid command error with the given message.
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::CommandNotFound { .. } => "Command Not Found",
            Self::HandlerFailed { .. } => "Handler Failed",
            Self::InvalidCommand(_) => "Invalid Command",
            Self::Config(_) => "Configuration Error",
        }
    }

    /// Returns true for the conditions a user can recover from by changing input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::CommandNotFound { .. } | Self::HandlerFailed { .. }
        )
    }
}

/// Result type alias using CmdrunError.
pub type Result<T> = std::result::Result<T, CmdrunError>;
