//! Local file source implementation

use crate::core::AnalysisError;
use crate::domain::repositories::FileSource;
use std::fs;
use std::path::Path;

/// Reads whole files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl FileSource for LocalFileSource {
    fn read(&self, path: &Path) -> Result<Vec<u8>, AnalysisError> {
        let data = fs::read(path).map_err(|source| AnalysisError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(path = %path.display(), bytes = data.len(), "read file");
        Ok(data)
    }
}
