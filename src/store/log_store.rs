//! Append-only CSV log of completed sessions.
//!
//! Every access opens the file, reads or appends, and closes it again: the store
//! keeps no cursor, so each `scan()` starts over from the first data row.

use crate::errors::{AppError, AppResult};
use crate::models::{LOG_HEADER, LogRecord};
use csv::{ReaderBuilder, StringRecordsIntoIter, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with its header row if it is missing or empty.
    /// Existing content is never touched, so calling this twice is harmless.
    pub fn initialize(&self) -> AppResult<()> {
        let mut file = self.open_for_append()?;

        if file.metadata()?.len() == 0 {
            file.write_all(&header_bytes()?)?;
            file.flush()?;
            debug!(path = %self.path.display(), "log file initialized");
        }

        Ok(())
    }

    /// Append one row. The row is encoded up front and written with a single
    /// `write_all`, so a reader never sees half of it.
    pub fn append(&self, record: &LogRecord) -> AppResult<()> {
        let mut file = self.open_for_append()?;

        let mut buf = Vec::new();
        if file.metadata()?.len() == 0 {
            buf.extend(header_bytes()?);
        } else if !ends_with_newline(&mut file)? {
            buf.push(b'\n');
        }
        buf.extend(encode_row(record)?);

        file.write_all(&buf)?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            project = %record.project,
            minutes = record.duration_minutes,
            "record appended"
        );
        Ok(())
    }

    /// Lazily parse every row after the header.
    /// A missing file is an empty log.
    pub fn scan(&self) -> AppResult<Records> {
        let inner = if self.path.exists() {
            let file = File::open(&self.path)?;
            let reader = ReaderBuilder::new().has_headers(true).from_reader(file);
            Some(reader.into_records())
        } else {
            None
        };

        Ok(Records {
            path: self.path.clone(),
            inner,
            failed: false,
        })
    }

    /// Read the whole log, stopping at the first corrupted row.
    pub fn read_all(&self) -> AppResult<Vec<LogRecord>> {
        self.scan()?.collect()
    }

    fn open_for_append(&self) -> AppResult<File> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?)
    }
}

/// Iterator over the rows of a log file.
/// Yields at most one error: after a corrupted row the scan is over.
pub struct Records {
    path: PathBuf,
    inner: Option<StringRecordsIntoIter<File>>,
    failed: bool,
}

impl Iterator for Records {
    type Item = AppResult<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let row = self.inner.as_mut()?.next()?;
        let parsed = row
            .map_err(|e| self.csv_error(e))
            .and_then(|raw| self.decode(&raw));

        if parsed.is_err() {
            self.failed = true;
        }
        Some(parsed)
    }
}

impl Records {
    fn decode(&self, raw: &csv::StringRecord) -> AppResult<LogRecord> {
        let line = raw.position().map(|p| p.line()).unwrap_or(0);

        let record: LogRecord = raw
            .deserialize(None)
            .map_err(|e| self.corruption(line, e.to_string()))?;

        if !record.duration_minutes.is_finite() || record.duration_minutes < 0.0 {
            return Err(self.corruption(
                line,
                format!("invalid duration {}", record.duration_minutes),
            ));
        }

        Ok(record)
    }

    fn csv_error(&self, err: csv::Error) -> AppError {
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            return AppError::Csv(err);
        }
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        self.corruption(line, err.to_string())
    }

    fn corruption(&self, line: u64, reason: String) -> AppError {
        warn!(path = %self.path.display(), line, %reason, "corrupted log row");
        AppError::DataCorruption {
            path: self.path.clone(),
            line,
            reason,
        }
    }
}

fn header_bytes() -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    wtr.write_record(LOG_HEADER)?;
    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

fn encode_row(record: &LogRecord) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    wtr.serialize(record)?;
    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
