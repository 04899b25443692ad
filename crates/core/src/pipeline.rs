//! Concurrent scan orchestration
//!
//! Fans one worker thread out per source, funnels every extracted value
//! through a single rendezvous channel into the duplicate detector, and
//! folds the three ways a scan can end (clean drain, duplicate, worker
//! failure) into one result. Cancellation is raised exactly once on any
//! fatal path and every worker is joined before the scan returns.

use crate::{worker, CancelToken, DuplicateDetector, Error, Result};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info};

/// Outcome of a scan that found no duplicates
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Number of sources scanned
    pub sources: usize,
    /// Distinct values consumed across all sources
    pub unique_values: usize,
}

/// Scan `field` across all `paths` concurrently, failing on the first
/// duplicate value or the first source failure.
///
/// The calling thread runs the detector loop; one thread is spawned per
/// source. The rendezvous channel means a slow consumer throttles every
/// producer equally, so memory is bounded by in-flight hand-offs rather
/// than input size.
///
/// Tie-break on the accepted race between failure kinds: a duplicate the
/// detector observed before the channel drained wins; otherwise the first
/// worker error in spawn order is surfaced. Conditions past the first are
/// discarded.
pub fn process_sources(
    token: CancelToken,
    paths: Vec<PathBuf>,
    field: &str,
) -> Result<ScanSummary> {
    let source_count = paths.len();
    let (tx, rx) = mpsc::sync_channel::<String>(0);

    let mut workers = Vec::with_capacity(source_count);
    for path in paths {
        let tx = tx.clone();
        let token = token.clone();
        let field = field.to_string();
        workers.push(thread::spawn(move || {
            let outcome = worker::drain_source(&path, &field, tx, &token);
            if outcome.is_err() {
                // First failure cancels the whole group.
                token.cancel();
            }
            outcome
        }));
    }
    // The channel closes once the last worker drops its sender.
    drop(tx);

    let mut detector = DuplicateDetector::new();
    let mut duplicate = None;
    for value in rx.iter() {
        if !detector.observe(&value) {
            info!("duplicate value detected, canceling in-flight readers");
            token.cancel();
            duplicate = Some(value);
            break;
        }
    }
    // Unblock any worker parked on a hand-off before joining.
    drop(rx);

    let mut first_error = None;
    for handle in workers {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    if let Some(value) = duplicate {
        return Err(Error::Duplicate(value));
    }
    if let Some(error) = first_error {
        return Err(error);
    }

    debug!(
        "scan complete: {} distinct values across {} sources",
        detector.unique_count(),
        source_count
    );
    Ok(ScanSummary {
        sources: source_count,
        unique_values: detector.unique_count(),
    })
}
