//! Error types for the scanning core

use std::path::PathBuf;
use thiserror::Error;

/// Core scanning errors
///
/// Exactly one of these is surfaced per scan, whichever fatal condition
/// the coordination logic observed first.
#[derive(Error, Debug)]
pub enum Error {
    /// A source could not be opened or read (open, I/O, or CSV parse failure)
    #[error(transparent)]
    Source(#[from] dupscan_formats::Error),

    /// A source's header lacks the scanned column
    #[error("{path:?}: header has no `{field}` column")]
    MissingField { path: PathBuf, field: String },

    /// The same value was seen twice, within one source or across sources
    #[error("duplicate value: {0}")]
    Duplicate(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
