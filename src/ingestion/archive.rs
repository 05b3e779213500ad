//! Archive extraction.
//!
//! Archives are extracted into an [`ExtractionTarget`] chosen by the caller. The default,
//! [`ExtractionTarget::TempDir`], gives every ingestion its own private directory so that
//! repeated or concurrent calls never see each other's files.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::{IngestionError, IngestionResult};

/// Directory used by [`ExtractionTarget::legacy`].
pub const LEGACY_EXTRACTION_DIR: &str = "extracted_data";

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArchiveFormat {
    /// PKZIP archive (`.zip`).
    Zip,
}

impl ArchiveFormat {
    /// All registered formats.
    pub const ALL: &'static [ArchiveFormat] = &[ArchiveFormat::Zip];

    /// Parse a format from a dotted extension such as `".zip"` (exact, case-sensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| ext == f.extension())
    }

    /// The dotted extension handled by this format.
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ".zip",
        }
    }

    /// Returns `true` if `path` carries this format's extension.
    pub fn matches_path(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == &self.extension()[1..])
    }
}

/// Where archive entries are extracted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtractionTarget {
    /// A fresh temporary directory per ingestion, removed once the table is loaded.
    #[default]
    TempDir,
    /// A caller-owned directory. Created if absent; colliding entries are overwritten and
    /// nothing is removed afterwards.
    Dir(PathBuf),
}

impl ExtractionTarget {
    /// `extracted_data` relative to the current working directory.
    pub fn legacy() -> Self {
        ExtractionTarget::Dir(PathBuf::from(LEGACY_EXTRACTION_DIR))
    }

    /// Materialize the target as a directory on disk.
    pub fn prepare(&self) -> IngestionResult<ExtractionDir> {
        match self {
            ExtractionTarget::TempDir => {
                let tmp = tempfile::Builder::new().prefix("archive-ingest-").tempdir()?;
                Ok(ExtractionDir::Temp(tmp))
            }
            ExtractionTarget::Dir(path) => {
                fs::create_dir_all(path)?;
                Ok(ExtractionDir::Owned(path.clone()))
            }
        }
    }
}

/// A prepared extraction directory. Temporary directories are deleted on drop.
#[derive(Debug)]
pub enum ExtractionDir {
    Temp(TempDir),
    Owned(PathBuf),
}

impl ExtractionDir {
    pub fn path(&self) -> &Path {
        match self {
            ExtractionDir::Temp(tmp) => tmp.path(),
            ExtractionDir::Owned(path) => path,
        }
    }
}

/// Check that `path` has the extension of `format`.
///
/// Does not touch the filesystem.
pub fn validate_archive_path(path: &Path, format: ArchiveFormat) -> IngestionResult<()> {
    if format.matches_path(path) {
        Ok(())
    } else {
        Err(IngestionError::InvalidInput {
            path: path.to_path_buf(),
            message: format!("expected a {} archive", format.extension()),
        })
    }
}

/// Extract every entry of the archive at `path` into `dir`.
///
/// `dir` is created if absent. Existing files with the same names are overwritten.
pub fn extract_archive(path: &Path, format: ArchiveFormat, dir: &Path) -> IngestionResult<()> {
    validate_archive_path(path, format)?;
    match format {
        ArchiveFormat::Zip => extract_zip(path, dir),
    }
}

fn extract_zip(path: &Path, dir: &Path) -> IngestionResult<()> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    debug!(
        archive = %path.display(),
        dir = %dir.display(),
        entries = archive.len(),
        "extracting zip archive"
    );

    fs::create_dir_all(dir)?;
    archive.extract(dir)?;
    Ok(())
}
