//! Filesystem metadata reader

use crate::core::ExtractionError;
use crate::domain::entities::FileStats;
use crate::domain::repositories::FileStatReader;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Reads size and timestamps with `std::fs::metadata`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStatReader;

impl FsStatReader {
    pub fn new() -> Self {
        Self
    }
}

impl FileStatReader for FsStatReader {
    fn stat(&self, path: &Path) -> Result<FileStats, ExtractionError> {
        let metadata = fs::metadata(path).map_err(|source| ExtractionError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        // Birth time is missing on some filesystems; that is not a stat failure.
        let created = metadata.created().ok().map(DateTime::<Local>::from);
        let modified = metadata.modified().ok().map(DateTime::<Local>::from);

        Ok(FileStats {
            size: metadata.len(),
            created,
            modified,
        })
    }
}
