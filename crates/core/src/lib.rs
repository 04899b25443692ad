//! Concurrent cross-source duplicate detection
//!
//! This crate provides the fan-out/fan-in machinery for scanning a single
//! column across many CSV sources in parallel: per-source workers, a shared
//! merge channel, one duplicate detector, and cooperative cancellation.

pub mod cancel;
pub mod detector;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod worker;

pub use cancel::CancelToken;
pub use detector::DuplicateDetector;
pub use error::{Error, Result};
pub use pipeline::{process_sources, ScanSummary};
