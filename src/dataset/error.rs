//! Dataset loading errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that prevent the resort table from being built.
///
/// All of these are fatal at start-up.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The resort file could not be opened or read.
    #[error("failed to read resort file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an in-memory source failed.
    #[error("failed to read resort data: {0}")]
    Read(#[from] io::Error),

    /// A row could not be parsed (missing column, bad number, ragged row).
    #[error("malformed resort data: {0}")]
    Csv(#[from] csv::Error),

    /// A numeric column holds NaN or infinity.
    #[error("line {line}: column '{column}' must be a finite number, got {value}")]
    NonFinite {
        line: u64,
        column: &'static str,
        value: f64,
    },

    /// The file has a header but no resorts.
    #[error("resort data contains no rows")]
    Empty,
}
