//! File source trait

use crate::core::AnalysisError;
use std::path::Path;

/// Supplies the full content of a file as one immutable buffer
pub trait FileSource: Send + Sync {
    /// Reads every byte of the file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, AnalysisError>;
}
