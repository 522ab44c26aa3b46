//! Errors for loading, decoding and applying a configuration

use declarative::ApplyError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dotconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Anything that ends a run
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be opened
    #[error("could not open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not a valid configuration document
    #[error("invalid configuration in {}: {source}", path.display())]
    JsonDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry names a command type with no registered action
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// An entry's `args` do not fit the action's fields
    #[error("invalid args for {command}: {source}")]
    MalformedArgs {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// An action failed while being applied
    #[error(transparent)]
    Apply(#[from] ApplyError),
}
