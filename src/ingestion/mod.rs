//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`factory`]) which:
//!
//! - picks an ingestor from the file extension via [`get_ingestor`]
//! - extracts the archive, locates its single CSV and loads it into a
//!   [`crate::types::DataSet`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The individual stages are also available under:
//! - [`archive`]: extraction
//! - [`locate`]: CSV location
//! - [`csv`] and [`infer`]: CSV loading

pub mod archive;
pub mod csv;
pub mod factory;
pub mod infer;
pub mod ingestor;
pub mod locate;
pub mod observability;

pub use archive::{ArchiveFormat, ExtractionTarget, LEGACY_EXTRACTION_DIR};
pub use factory::{get_ingestor, get_ingestor_with_options, ingest_from_path};
pub use ingestor::{DataIngestor, IngestionOptions, ZipIngestor};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver, TracingObserver,
};
