//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a reconciliation input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("{dataset} file not found: {path}")]
    FileNotFound { dataset: String, path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read {dataset} file {path}: {source}")]
    FileRead {
        dataset: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required key column absent from the header row.
    #[error("missing column '{column}' in {dataset} file: {path}")]
    MissingColumn {
        column: String,
        dataset: String,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
