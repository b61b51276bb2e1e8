//! CSV boundary for tenancy histories exported from the manual-entry side.
//!
//! The engine itself never touches files; this module turns one CSV export
//! into a [`RentHistory`] and nothing more.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::rentcheck::domain::{HistoryError, RentHistory};

#[derive(Debug)]
pub enum HistoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: usize, reason: String },
    EmptyExport,
    History(HistoryError),
}

impl std::fmt::Display for HistoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryImportError::Io(err) => write!(f, "failed to read history export: {}", err),
            HistoryImportError::Csv(err) => write!(f, "invalid history CSV data: {}", err),
            HistoryImportError::Row { line, reason } => {
                write!(f, "invalid history row on line {}: {}", line, reason)
            }
            HistoryImportError::EmptyExport => write!(f, "history export contains no rows"),
            HistoryImportError::History(err) => {
                write!(f, "could not assemble rent history: {}", err)
            }
        }
    }
}

impl std::error::Error for HistoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryImportError::Io(err) => Some(err),
            HistoryImportError::Csv(err) => Some(err),
            HistoryImportError::Row { .. } | HistoryImportError::EmptyExport => None,
            HistoryImportError::History(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HistoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for HistoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<HistoryError> for HistoryImportError {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

pub struct CsvHistoryImporter;

impl CsvHistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RentHistory, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows are taken in file order; the first one must be the contract
    /// start. Chronology is left to the validator, which reports violations
    /// instead of refusing the input.
    pub fn from_reader<R: Read>(reader: R) -> Result<RentHistory, HistoryImportError> {
        let mut records = parser::parse_records(reader)?;
        if records.is_empty() {
            return Err(HistoryImportError::EmptyExport);
        }

        let start = records.remove(0);
        Ok(RentHistory::new(start, records)?)
    }
}
