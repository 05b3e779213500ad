use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// One enum covers every stage of archive ingestion: extraction, CSV location and CSV loading,
/// plus the factory lookup.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive could not be read (corrupt, truncated, unsafe entry names, ...).
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Malformed CSV content, as reported by the CSV parser.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The supplied path is not an archive of the format the ingestor handles.
    #[error("invalid input '{}': {message}", path.display())]
    InvalidInput { path: PathBuf, message: String },

    /// No CSV file was present after extraction.
    #[error("no csv files found in {}", dir.display())]
    NotFound { dir: PathBuf },

    /// More than one CSV file was present after extraction.
    #[error("multiple csv files found in {}, choose one: {candidates:?}", dir.display())]
    AmbiguousInput {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    /// No ingestor is registered for the extension.
    #[error("unsupported format: no ingestor registered for extension '{extension}'")]
    UnsupportedFormat { extension: String },

    /// The input does not conform to the provided schema (missing columns, no header, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
