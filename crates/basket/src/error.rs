//! Error types for the basket library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type returned by the loader.
#[derive(Debug, Error)]
pub enum BasketError {
    /// File extension is neither `.csv` nor `.json`.
    #[error("Unsupported format for '{path}': use a .csv or .json file")]
    UnsupportedFormat { path: PathBuf },

    /// Any failure after dispatch, with the original cause attached.
    #[error("Failed to load '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}

impl BasketError {
    /// The underlying ingestion failure, if this is a load error.
    pub fn ingest_cause(&self) -> Option<&IngestError> {
        match self {
            BasketError::Load { source, .. } => Some(source),
            BasketError::UnsupportedFormat { .. } => None,
        }
    }
}

/// Causes of a failed load.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Error opening or reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the CSV tokenizer (includes invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Top-level JSON value is neither an array nor an object.
    #[error("Unrecognized JSON shape: expected an array or object, found {found}")]
    UnrecognizedJsonShape { found: &'static str },
}

/// Result type alias for basket operations.
pub type Result<T> = std::result::Result<T, BasketError>;
