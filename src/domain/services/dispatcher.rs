//! Category dispatcher
//!
//! Routes a classified file to the single extractor its category owns. The
//! routing is an exhaustive match over [`Category`], so adding a category
//! without deciding its extractor fails to compile.

use crate::core::ExtractionError;
use crate::domain::entities::{Category, Extraction, TypeLabel};
use crate::domain::repositories::{FileStatReader, ImageInspector};
use std::path::Path;

/// Holds one extractor per capability and picks between them by category
#[derive(Debug, Clone)]
pub struct CategoryDispatcher<I, S> {
    image_inspector: I,
    stat_reader: S,
}

impl<I: ImageInspector, S: FileStatReader> CategoryDispatcher<I, S> {
    pub fn new(image_inspector: I, stat_reader: S) -> Self {
        Self {
            image_inspector,
            stat_reader,
        }
    }

    /// Runs the extractor for `category` against the file at `path`
    ///
    /// `label` only feeds diagnostics. `Category::Unknown` is a handled
    /// variant: it yields [`Extraction::Unknown`] without calling any
    /// extractor.
    pub fn dispatch(
        &self,
        category: Category,
        path: &Path,
        label: Option<&TypeLabel>,
    ) -> Result<Extraction, ExtractionError> {
        tracing::debug!(
            path = %path.display(),
            label = label.map(TypeLabel::as_str).unwrap_or("unknown"),
            %category,
            "dispatching to extractor"
        );

        match category {
            Category::Image => self.image_inspector.inspect(path).map(Extraction::Image),
            Category::Audio => self.stat_reader.stat(path).map(Extraction::Audio),
            Category::Document => self.stat_reader.stat(path).map(Extraction::Document),
            Category::Unknown => Ok(Extraction::Unknown),
        }
    }
}
