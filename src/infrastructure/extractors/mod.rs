//! Category extractor adapters

mod file_stats;
mod image_header;

pub use file_stats::FsStatReader;
pub use image_header::ImageHeaderInspector;
