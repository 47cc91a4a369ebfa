//! Error types for the rbpt CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the CLI can fail with.
#[derive(Debug, Error)]
pub enum RbptError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input or output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, RbptError>;
