//! Metadata produced by the category extractors

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Color layout derived from an image's channel count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
    Unknown,
}

impl ColorSpace {
    /// Maps a channel count to its color space
    pub fn from_channels(channels: u8) -> Self {
        match channels {
            1 => ColorSpace::Grayscale,
            2 => ColorSpace::GrayscaleAlpha,
            3 => ColorSpace::Rgb,
            4 => ColorSpace::Rgba,
            _ => ColorSpace::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Grayscale => "Grayscale",
            ColorSpace::GrayscaleAlpha => "Grayscale with Alpha",
            ColorSpace::Rgb => "RGB",
            ColorSpace::Rgba => "RGBA",
            ColorSpace::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dimensions and channel layout read from an image header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub color_space: ColorSpace,
}

impl ImageMetadata {
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self {
            width,
            height,
            channels,
            color_space: ColorSpace::from_channels(channels),
        }
    }
}

/// Filesystem metadata for files that are not decoded
///
/// Timestamps are `None` when the platform or filesystem does not record them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub size: u64,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

/// Result of dispatching a file to its category extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Extraction {
    Image(ImageMetadata),
    Audio(FileStats),
    Document(FileStats),
    /// No extractor runs for unknown files
    Unknown,
}
