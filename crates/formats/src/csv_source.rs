//! Streaming CSV source reader
//!
//! Provides lazy row-by-row reading of CSV files with automatic gzip
//! decompression support. The header row is read eagerly at open time;
//! data rows are only pulled as the iterator is driven.

use crate::{Error, Result, Row};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single open CSV source: retained header plus a lazy row stream.
///
/// The underlying file handle is owned by the source and released on drop,
/// whichever way iteration ends.
pub struct CsvSource {
    path: PathBuf,
    header: Vec<String>,
    records: StringRecordsIntoIter<Box<dyn Read>>,
    line: u64,
}

impl CsvSource {
    /// Open a CSV file, auto-detecting gzip compression by extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path.extension().and_then(|e| e.to_str());
        let input: Box<dyn Read> = match extension {
            Some("gz") => {
                debug!("Opening gzip-compressed CSV source: {:?}", path);
                Box::new(GzDecoder::new(file))
            }
            _ => {
                debug!("Opening plain CSV source: {:?}", path);
                Box::new(file)
            }
        };

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
        let header = reader.headers()?.iter().map(String::from).collect();

        Ok(Self {
            path: path.to_path_buf(),
            header,
            records: reader.into_records(),
            line: 0,
        })
    }

    /// The header row, in file order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Path this source was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of data rows yielded so far
    pub fn rows_read(&self) -> u64 {
        self.line
    }
}

impl Iterator for CsvSource {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.records.next()? {
            Ok(record) => {
                self.line += 1;
                let fields = record.iter().map(String::from).collect();
                Some(Ok(Row::new(fields, self.line)))
            }
            Err(e) => Some(Err(Error::Csv(e))),
        }
    }
}
