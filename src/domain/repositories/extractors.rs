//! Extractor traits
//!
//! One trait per extraction capability. The dispatcher holds one
//! implementation of each and picks between them by category.

use crate::core::ExtractionError;
use crate::domain::entities::{FileStats, ImageMetadata};
use std::path::Path;

/// Decodes an image header to report its dimensions and channel count.
///
/// Implementations must be `Send + Sync` so a dispatcher can be shared by
/// parallel analyses.
pub trait ImageInspector: Send + Sync {
    /// Reads the header of the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ImageDecode`] when the file cannot be opened
    /// or its header is not a decodable image.
    fn inspect(&self, path: &Path) -> Result<ImageMetadata, ExtractionError>;
}

/// Reports size and timestamps of a file from the filesystem.
pub trait FileStatReader: Send + Sync {
    /// Stats the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Stat`] when the metadata cannot be read.
    fn stat(&self, path: &Path) -> Result<FileStats, ExtractionError>;
}
