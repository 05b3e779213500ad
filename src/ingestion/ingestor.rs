//! The [`DataIngestor`] capability and its zip implementation.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::IngestionResult;
use crate::types::{DataSet, Schema};

use super::archive::{extract_archive, validate_archive_path, ArchiveFormat, ExtractionTarget};
use super::csv::load_csv;
use super::locate::locate_single_csv;
use super::observability::{
    severity_for_error, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases: extract into a private temporary directory, infer column
/// types, no observer.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Where archive entries are extracted.
    pub extraction: ExtractionTarget,
    /// If `None`, column names and types are inferred from the CSV.
    pub schema: Option<Schema>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("extraction", &self.extraction)
            .field("schema", &self.schema)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            extraction: ExtractionTarget::default(),
            schema: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Converts a source file into a [`DataSet`].
pub trait DataIngestor: Send + Sync + fmt::Debug {
    /// Archive format this ingestor accepts.
    fn format(&self) -> ArchiveFormat;

    /// Ingest the file at `path`.
    fn ingest(&self, path: &Path) -> IngestionResult<DataSet>;
}

/// Ingests a zip archive holding exactly one top-level CSV file.
///
/// `ingest` runs three stages in order and stops at the first failure:
///
/// 1. extract the archive into the configured [`ExtractionTarget`]
/// 2. locate the single `.csv` file in the extraction directory
/// 3. load it into a [`DataSet`]
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use archive_ingest::ingestion::{DataIngestor, ZipIngestor};
///
/// # fn main() -> Result<(), archive_ingest::IngestionError> {
/// let ds = ZipIngestor::default().ingest(Path::new("data/archive.zip"))?;
/// println!("rows={} columns={:?}", ds.row_count(), ds.column_names());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZipIngestor {
    options: IngestionOptions,
}

impl ZipIngestor {
    /// Create a zip ingestor with the given options.
    pub fn new(options: IngestionOptions) -> Self {
        Self { options }
    }

    /// Options this ingestor was built with.
    pub fn options(&self) -> &IngestionOptions {
        &self.options
    }

    fn run(&self, path: &Path) -> IngestionResult<DataSet> {
        let format = self.format();
        validate_archive_path(path, format)?;

        // Held until the table is loaded; temporary directories are removed on drop.
        let dir = self.options.extraction.prepare()?;
        extract_archive(path, format, dir.path())?;

        let csv_path = locate_single_csv(dir.path())?;
        debug!(csv = %csv_path.display(), "loading csv");
        load_csv(&csv_path, self.options.schema.as_ref())
    }
}

impl DataIngestor for ZipIngestor {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Zip
    }

    fn ingest(&self, path: &Path) -> IngestionResult<DataSet> {
        let result = self.run(path);

        if let Some(obs) = self.options.observer.as_ref() {
            let ctx = IngestionContext {
                path: path.to_path_buf(),
                format: self.format(),
            };
            match &result {
                Ok(ds) => obs.on_success(
                    &ctx,
                    IngestionStats {
                        rows: ds.row_count(),
                        columns: ds.column_count(),
                    },
                ),
                Err(e) => {
                    let sev = severity_for_error(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.options.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }

        result
    }
}
