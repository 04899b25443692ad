//! Tabular source readers for duplicate scanning
//!
//! This crate provides streaming CSV readers with memory-efficient
//! row-at-a-time iteration and transparent gzip decompression.

pub mod csv_source;
pub mod error;
pub mod record;

pub use csv_source::CsvSource;
pub use error::{Error, Result};
pub use record::Row;
