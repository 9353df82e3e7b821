//! Append-only tabular destinations.
//!
//! A sink never rewrites existing rows; each append grows the table by the
//! number of rows passed. Column validation is the caller's problem: rows
//! are assumed to match the table's header layout.

use std::fs::OpenOptions;
use std::path::PathBuf;

use fba_sync_core::{Row, SourceKind};
use thiserror::Error;

/// Error type for sink operations.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of one append call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Rows were appended.
    Appended(usize),
    /// The batch was empty; the destination was not touched.
    NoData,
}

/// An append-only tabular destination.
pub trait RowSink {
    /// Append `rows` to the source kind's destination table.
    ///
    /// # Errors
    ///
    /// Returns a `SinkError` if the destination cannot be written.
    fn append(&self, kind: SourceKind, rows: Vec<Row>) -> Result<AppendOutcome, SinkError>;
}

/// CSV-file sink: one `<table>.csv` per destination table.
///
/// The header row is written only when a table file is created; subsequent
/// appends grow the file without touching prior rows.
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Create a sink writing tables under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, kind: SourceKind) -> PathBuf {
        self.dir.join(format!("{}.csv", kind.table()))
    }
}

impl RowSink for CsvSink {
    fn append(&self, kind: SourceKind, rows: Vec<Row>) -> Result<AppendOutcome, SinkError> {
        if rows.is_empty() {
            return Ok(AppendOutcome::NoData);
        }

        let path = self.table_path(kind);
        let new_table = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if new_table {
            writer.write_record(kind.columns())?;
        }

        let appended = rows.len();
        for row in rows {
            writer.write_record(row.to_strings())?;
        }
        writer.flush()?;

        Ok(AppendOutcome::Appended(appended))
    }
}
