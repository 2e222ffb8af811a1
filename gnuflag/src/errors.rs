/*!
Error types. [`ConfigError`] is fatal and means the option table itself is
malformed. [`Diagnostic`] describes a problem on the command line; those are
collected and reported, and the parse carries on. [`ValueError`] is what a
[`Binding`][crate::Binding] returns when it refuses an argument.
*/

use core::fmt::Display;

use joinery::JoinableIterator;

/// The option table can't be used. Returned before any scanning happens;
/// this is a programming error in the table, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("option {option} can either take a required or an optional argument, not both")]
    ConflictingArgumentArity { option: String },

    #[error("duplicate long option --{name}")]
    DuplicateLongOption { name: String },

    #[error("duplicate short option -{short}")]
    DuplicateShortOption { short: char },
}

/// A recoverable problem found while scanning the command line. Each one is
/// reported as a single line; the option it concerns (if any) is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("unknown option '{token}'")]
    UnknownOption { token: String },

    #[error(
        "option '{token}' is ambiguous; possibilities: {}",
        .candidates.iter().join_with(", ")
    )]
    AmbiguousOption {
        token: String,
        candidates: Vec<String>,
    },

    #[error("missing argument for '{token}'")]
    MissingArgument { token: String },

    #[error("option '{token}' doesn't allow an argument")]
    UnexpectedArgument { token: String },

    /// The option was recognized, but its [`Value`][crate::Value] refused
    /// the occurrence.
    #[error("option {option}: {error}")]
    Rejected { option: String, error: ValueError },
}

/// Errors that can occur while handing an argument to a [`Value`][crate::Value]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The option appeared more than once and isn't
    /// [`REPEATABLE`][crate::Flags::REPEATABLE]
    #[error("can only be used once")]
    AlreadySet,

    /// The option requires a value, and none was provided (or there was no
    /// default for an optional one)
    #[error("requires an argument")]
    MissingArgument,

    #[error("{argument:?} is not a valid number")]
    InvalidNumber { argument: String },

    #[error("{argument:?} is out of range")]
    OutOfRange { argument: String },

    /// The argument failed to parse into an instance of the type
    #[error("failed to parse {argument:?}: {message}")]
    Parse { argument: String, message: String },

    /// Something else went wrong
    #[error("{0}")]
    Custom(String),
}

impl ValueError {
    pub fn parse_error(argument: &str, message: impl Display) -> Self {
        Self::Parse {
            argument: argument.to_owned(),
            message: message.to_string(),
        }
    }

    pub fn custom(message: impl Display) -> Self {
        Self::Custom(message.to_string())
    }
}
