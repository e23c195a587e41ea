//! Image header inspector backed by the `image` crate
//!
//! Only the decoder is constructed; pixel data is never decoded.

use crate::core::ExtractionError;
use crate::domain::entities::ImageMetadata;
use crate::domain::repositories::ImageInspector;
use image::{ImageDecoder, ImageReader};
use std::path::Path;

/// Reads width, height and channel count from JPEG, PNG and GIF headers
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageHeaderInspector;

impl ImageHeaderInspector {
    pub fn new() -> Self {
        Self
    }
}

impl ImageInspector for ImageHeaderInspector {
    fn inspect(&self, path: &Path) -> Result<ImageMetadata, ExtractionError> {
        let decode_error = |message: String| ExtractionError::ImageDecode {
            path: path.to_path_buf(),
            message,
        };

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?;
        let decoder = reader
            .into_decoder()
            .map_err(|e| decode_error(e.to_string()))?;

        let (width, height) = decoder.dimensions();
        let channels = decoder.color_type().channel_count();

        tracing::debug!(path = %path.display(), width, height, channels, "decoded image header");
        Ok(ImageMetadata::new(width, height, channels))
    }
}
