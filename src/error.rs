//! Error types for loading word tables and configuring a run.
//!
//! Missing or empty fields on a record are never errors: they degrade to empty
//! renderings or exclusion from a sample. Only I/O at the edges fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Every source passed to the loader failed to read or parse.
    #[error("no readable word source among {attempted} path(s)")]
    NoReadableSource { attempted: usize },

    /// A source could not be parsed as CSV.
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A source could not be opened.
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file (or its parent directory) could not be created.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log level outside 0..=4.
    #[error("log level must be between 0 and 4 (got {0})")]
    LogLevel(u8),
}

pub type Result<T> = std::result::Result<T, DrillError>;
