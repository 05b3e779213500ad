//! Locating the single CSV file in an extraction directory.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestionError, IngestionResult};

const CSV_SUFFIX: &[u8] = b".csv";

/// Return the absolute path of the only `.csv` file directly inside `dir`.
///
/// Only regular files at the top level of `dir` are considered and the suffix match is
/// case-sensitive. Zero matches is [`IngestionError::NotFound`]; more than one is
/// [`IngestionError::AmbiguousInput`]. Names need not be valid UTF-8; the suffix is matched on
/// the raw file name.
pub fn locate_single_csv(dir: &Path) -> IngestionResult<PathBuf> {
    let mut candidates: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.as_encoded_bytes().ends_with(CSV_SUFFIX) {
            candidates.push(name);
        }
    }
    candidates.sort();
    debug!(dir = %dir.display(), ?candidates, "located csv candidates");

    match candidates.len() {
        0 => Err(IngestionError::NotFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(std::path::absolute(dir.join(&candidates[0]))?),
        _ => Err(IngestionError::AmbiguousInput {
            dir: dir.to_path_buf(),
            candidates: candidates
                .iter()
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        }),
    }
}
