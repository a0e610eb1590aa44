//! Error types for parsing, routing, verification, and command execution.

use thiserror::Error;

/// Main error type for the shunt command system.
///
/// Every failure is terminal for the invocation that produced it; there is
/// no retry or recovery inside the library. The host maps these to console
/// output and exit codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A value-taking option was named but produced neither a supplied
    /// value nor a default.
    #[error("a value is required for option `{option}`")]
    OptionValueRequired { option: String },

    /// Positional arity mismatch at verification time.
    #[error("expected {expected} argument(s), got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },

    /// An option-shaped token survived verification unmatched by the
    /// resolved command's signature.
    #[error("unknown option `{token}`")]
    UnknownOption { token: String },

    /// A command requested a positional value it never declared.
    #[error("argument `{name}` is not declared by this command")]
    ArgumentNotFound { name: String },

    /// A command requested an option it never declared.
    #[error("option `{name}` is not declared by this command")]
    OptionNotFound { name: String },

    /// Routing resolved to a node with no runnable behavior.
    #[error("no runnable command matched the given arguments")]
    CommandNotFound,

    /// Two descriptors in one signature share a name.
    #[error("duplicate argument name `{name}`")]
    DuplicateName { name: String },

    /// Two options in one signature share a short flag.
    #[error("duplicate short flag `-{short}`")]
    DuplicateShort { short: char },

    /// A default value was declared on something other than a value option.
    #[error("default value on non-value argument `{name}`")]
    DefaultOnNonValue { name: String },

    /// A command's own run behavior failed.
    #[error("{message}")]
    Execution { message: String },
}

impl Error {
    /// Wrap an arbitrary failure from a command's run behavior.
    pub fn execution(message: impl Into<String>) -> Self {
        Error::Execution {
            message: message.into(),
        }
    }
}

/// Result type alias for shunt command operations.
pub type Result<T> = std::result::Result<T, Error>;
