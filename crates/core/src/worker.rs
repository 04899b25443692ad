//! Per-source scan worker
//!
//! One worker drains one CSV source: it resolves the scanned column against
//! that source's own header, then forwards every extracted value to the
//! shared merge channel until the source is exhausted, the token fires, or
//! the consumer hangs up.

use crate::{extract, CancelToken, Error, Result};
use dupscan_formats::CsvSource;
use std::path::Path;
use std::sync::mpsc::SyncSender;
use tracing::debug;

/// Drain one source into the merge channel.
///
/// Produces exactly one outcome: `Ok(())` on a clean drain or a cooperative
/// stop (cancellation, or the receiving end dropped), `Err` on the first
/// open, read, or missing-column failure. None of these are retried.
pub fn drain_source(
    path: &Path,
    field: &str,
    tx: SyncSender<String>,
    token: &CancelToken,
) -> Result<()> {
    let mut source = CsvSource::open(path)?;
    let position =
        extract::locate(source.header(), field).ok_or_else(|| Error::MissingField {
            path: path.to_path_buf(),
            field: field.to_string(),
        })?;

    while let Some(row) = source.next() {
        let row = row?;
        if token.is_canceled() {
            debug!("canceled after {} rows of {:?}", source.rows_read(), path);
            return Ok(());
        }
        // Strict field counts are enforced by the reader, so a position
        // resolved against the header is always in range.
        let value = row.get(position).unwrap_or_default().to_string();
        if tx.send(value).is_err() {
            // Consumer hung up; the scan is over one way or the other.
            return Ok(());
        }
    }

    debug!("drained {} rows from {:?}", source.rows_read(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::mpsc;
    use std::thread;
    use tempfile::NamedTempFile;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_clean_drain_forwards_every_value() {
        let file = write_fixture("id,code\n1,X\n2,Y\n3,Z\n");
        let path = file.path().to_path_buf();
        let (tx, rx) = mpsc::sync_channel(0);
        let token = CancelToken::new();

        let worker_token = token.clone();
        let handle = thread::spawn(move || drain_source(&path, "code", tx, &worker_token));

        let values: Vec<String> = rx.iter().collect();
        assert_eq!(values, ["X", "Y", "Z"]);
        assert!(handle.join().unwrap().is_ok());
    }

    #[test]
    fn test_field_position_resolved_per_source() {
        let file = write_fixture("code,id\nW,4\n");
        let path = file.path().to_path_buf();
        let (tx, rx) = mpsc::sync_channel(0);
        let token = CancelToken::new();

        let handle = thread::spawn(move || drain_source(&path, "code", tx, &token));

        let values: Vec<String> = rx.iter().collect();
        assert_eq!(values, ["W"]);
        assert!(handle.join().unwrap().is_ok());
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let file = write_fixture("id,name\n1,foo\n");
        let (tx, _rx) = mpsc::sync_channel(0);
        let token = CancelToken::new();

        let outcome = drain_source(file.path(), "code", tx, &token);
        assert!(matches!(outcome, Err(Error::MissingField { .. })));
    }

    #[test]
    fn test_open_failure_is_fatal() {
        let (tx, _rx) = mpsc::sync_channel(0);
        let token = CancelToken::new();

        let outcome = drain_source(Path::new("/nonexistent/data.csv"), "code", tx, &token);
        assert!(matches!(
            outcome,
            Err(Error::Source(dupscan_formats::Error::Open { .. }))
        ));
    }

    #[test]
    fn test_canceled_token_stops_without_forwarding() {
        let file = write_fixture("id,code\n1,X\n2,Y\n");
        let (tx, rx) = mpsc::sync_channel(1);
        let token = CancelToken::new();
        token.cancel();

        let outcome = drain_source(file.path(), "code", tx, &token);
        assert!(outcome.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_a_clean_stop() {
        let file = write_fixture("id,code\n1,X\n2,Y\n");
        let (tx, rx) = mpsc::sync_channel(0);
        drop(rx);
        let token = CancelToken::new();

        let outcome = drain_source(file.path(), "code", tx, &token);
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_malformed_row_is_a_read_error() {
        let file = write_fixture("id,code\n1,X\n2\n");
        let path = file.path().to_path_buf();
        let (tx, rx) = mpsc::sync_channel(0);
        let token = CancelToken::new();

        let handle = thread::spawn(move || drain_source(&path, "code", tx, &token));

        let values: Vec<String> = rx.iter().collect();
        assert_eq!(values, ["X"]);
        assert!(matches!(
            handle.join().unwrap(),
            Err(Error::Source(dupscan_formats::Error::Csv(_)))
        ));
    }
}
