//! Ingestor lookup by file extension.
//!
//! [`get_ingestor`] maps a dotted extension (as produced by splitting a file name at its last
//! `.`) to a boxed [`DataIngestor`]. [`ingest_from_path`] does the split, the lookup and the
//! ingestion in one call.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::archive::ArchiveFormat;
use super::ingestor::{DataIngestor, IngestionOptions, ZipIngestor};

/// Return the ingestor registered for `extension` (e.g. `".zip"`), with default options.
///
/// Fails with [`IngestionError::UnsupportedFormat`] for any other extension, including the
/// empty string.
pub fn get_ingestor(extension: &str) -> IngestionResult<Box<dyn DataIngestor>> {
    get_ingestor_with_options(extension, IngestionOptions::default())
}

/// Like [`get_ingestor`], but the returned ingestor uses `options`.
pub fn get_ingestor_with_options(
    extension: &str,
    options: IngestionOptions,
) -> IngestionResult<Box<dyn DataIngestor>> {
    let format = ArchiveFormat::from_extension(extension).ok_or_else(|| {
        IngestionError::UnsupportedFormat {
            extension: extension.to_owned(),
        }
    })?;
    Ok(ingestor_for(format, options))
}

fn ingestor_for(format: ArchiveFormat, options: IngestionOptions) -> Box<dyn DataIngestor> {
    match format {
        ArchiveFormat::Zip => Box::new(ZipIngestor::new(options)),
    }
}

/// Dotted extension of the file name in `path`, or `""` if there is none.
///
/// `archive.tar.zip` yields `".zip"`; a leading dot alone (`.hidden`) is not an extension.
pub fn path_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// Pick an ingestor from the extension of `path` and ingest it.
///
/// # Examples
///
/// ```no_run
/// use archive_ingest::ingestion::{ingest_from_path, ExtractionTarget, IngestionOptions};
///
/// # fn main() -> Result<(), archive_ingest::IngestionError> {
/// let opts = IngestionOptions {
///     extraction: ExtractionTarget::Dir("work/extracted".into()),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("data/archive.zip", &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let ingestor = get_ingestor_with_options(&path_extension(path), options.clone())?;
    ingestor.ingest(path)
}
