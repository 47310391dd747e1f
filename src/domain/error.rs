use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

use super::ClassName;

/// Library-wide error type for firekit operations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Class name failed lexical validation.
    #[error(
        "Invalid class name '{0}': must start with a letter or underscore and contain only alphanumerics or underscores"
    )]
    InvalidClassName(String),

    /// Kernel config file (firekit.toml) not found at the workspace root.
    #[error("Kernel config not found. Run 'firekit init' first.")]
    ConfigMissing,

    /// Kernel config file could not be parsed.
    #[error("Malformed firekit.toml: {0}")]
    ConfigInvalid(String),

    /// Routes table could not be parsed.
    #[error("Malformed routes config: {0}")]
    RoutesInvalid(String),

    /// Workspace already carries a firekit.toml.
    #[error("firekit workspace already initialized")]
    AlreadyInitialized,

    /// Log file could not be opened for appending.
    #[error("Cannot open log file '{path}' for appending")]
    LogFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A class that never loaded was required.
    #[error("Class '{0}' was never loaded; no file was found on any search root")]
    UnresolvedClass(ClassName),

    /// No route matched the request URI.
    #[error("No route matched '{0}'")]
    RouteNotMatched(String),
}
