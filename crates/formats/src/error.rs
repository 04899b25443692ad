//! Error types for source readers

use std::path::PathBuf;
use thiserror::Error;

/// Source reader errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, Error>;
