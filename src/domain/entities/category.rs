//! Coarse file categories
//!
//! A category groups file types that share one metadata-extraction strategy.

use serde::Serialize;
use std::fmt;

/// Category a type label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Raster images: header decoded for dimensions and channels
    Image,
    /// Audio containers: filesystem metadata only
    Audio,
    /// Documents: filesystem metadata only
    Document,
    /// No known signature, or a label outside the category table
    Unknown,
}

impl Category {
    /// Returns a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Audio => "Audio",
            Category::Document => "Document",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
