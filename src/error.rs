//! Error types for discburst
//!
//! Every failure in the pipeline is fatal: the run aborts before any output
//! artifact is created.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for discburst
#[derive(Error, Debug)]
pub enum Error {
    /// Input missing or unreadable, or output path unwritable
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (inconsistent column counts, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An expected column is absent from the table
    #[error("missing column '{column}' (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// Rename target already exists alongside the source column
    #[error("cannot rename '{from}' to '{to}': both columns exist")]
    ColumnConflict { from: String, to: String },

    /// A data row whose width differs from the header
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Writing rendered output to a buffer or an HTTP response
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    /// Chart data serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive view server errors
    #[error("server error: {0}")]
    Serve(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing_column(column: &str, available: &[String]) -> Self {
        Error::MissingColumn {
            column: column.to_string(),
            available: available.to_vec(),
        }
    }
}

/// Convenience Result type using discburst Error
pub type Result<T> = std::result::Result<T, Error>;
