//! Error types for file logging and fan-out.

use std::io;
use std::path::PathBuf;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by loggers.
///
/// A call for a disabled level is not an error; it returns `Ok(())`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending a line to the log file failed.
    #[error("failed to write log entry: {0}")]
    Write(#[source] io::Error),

    /// The logger was closed before the call.
    #[error("failed to write log entry: log file is closed")]
    Closed,

    /// The context could not be encoded as JSON.
    #[error("failed to serialize log context: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for open, write and write-after-close failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Open { .. } | Error::Write(_) | Error::Closed)
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}
