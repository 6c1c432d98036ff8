use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading and normalizing the HNP source files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file missing. Fatal: initialization never proceeds on a
    /// partial source set.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a source file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level parse failure (broken quoting, inconsistent records).
    #[error("failed to parse csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON-level parse failure in the country-identity feed.
    #[error("failed to parse json {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required column is absent from a CSV header row.
    #[error("missing column {column:?}")]
    MissingColumn { column: String },

    /// A row with its required fields present carries a value that fails
    /// the strict parse. The row is dropped and processing continues.
    #[error("malformed row {record}: {message}")]
    MalformedRow { record: u64, message: String },
}

impl IngestError {
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, IngestError::MalformedRow { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
