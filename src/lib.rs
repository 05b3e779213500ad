//! `archive-ingest` turns a zip archive holding a single CSV file into an in-memory
//! [`types::DataSet`], ready for downstream processing.
//!
//! The primary entrypoint is [`ingestion::ingest_from_path`], which picks an ingestor from the
//! file extension (see [`ingestion::get_ingestor`]) and runs it. Ingestion happens in three
//! stages, each failing fast:
//!
//! 1. **Extract** the archive into an [`ingestion::ExtractionTarget`]. By default every call
//!    gets its own temporary directory, removed once the table is loaded.
//! 2. **Locate** the single top-level `.csv` file. No CSV is
//!    [`IngestionError::NotFound`]; several are [`IngestionError::AmbiguousInput`].
//! 3. **Load** the CSV. Without a schema, column types are inferred from the values; with a
//!    [`types::Schema`] in [`ingestion::IngestionOptions`], values are parsed into it.
//!
//! ## Value types
//!
//! - [`types::DataType::Int64`]
//! - [`types::DataType::Float64`]
//! - [`types::DataType::Bool`]
//! - [`types::DataType::Utf8`]
//!
//! Empty cells and common NA spellings (`NA`, `NaN`, `null`, ...) map to [`types::Value::Null`].
//!
//! ## Quick example
//!
//! ```no_run
//! use archive_ingest::ingestion::{ingest_from_path, IngestionOptions};
//!
//! # fn main() -> Result<(), archive_ingest::IngestionError> {
//! let ds = ingest_from_path("data/archive.zip", &IngestionOptions::default())?;
//! println!("rows={} columns={:?}", ds.row_count(), ds.column_names());
//! # Ok(())
//! # }
//! ```
//!
//! Using the factory directly:
//!
//! ```no_run
//! use std::path::Path;
//!
//! use archive_ingest::ingestion::get_ingestor;
//!
//! # fn main() -> Result<(), archive_ingest::IngestionError> {
//! let ingestor = get_ingestor(".zip")?;
//! let ds = ingestor.ingest(Path::new("data/archive.zip"))?;
//! println!("rows={}", ds.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: ingestors, factory and the individual stages
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types used across ingestion

pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{IngestionError, IngestionResult};
