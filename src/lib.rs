//! Identify files by their magic numbers.
//!
//! A [`SignatureRegistry`](domain::services::SignatureRegistry) maps leading
//! byte sequences to type labels. The matcher picks the longest registered
//! signature a buffer starts with, the classifier maps the label to a
//! [`Category`](domain::entities::Category), and the dispatcher hands the file
//! to that category's extractor.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub use application::AnalyzeFileUseCase;
pub use application::dto::{AnalyzeOptions, FileReport, OutputFormat};
pub use domain::entities::{Category, Extraction, Signature, TypeLabel};
pub use domain::services::{
    CategoryDispatcher, MatchOutcome, SignatureRegistry, classify, match_signature,
};

use infrastructure::extractors::{FsStatReader, ImageHeaderInspector};
use infrastructure::persistence::LocalFileSource;
use std::sync::Arc;

/// Analyzer wired to the local filesystem and the `image` crate
pub type LocalAnalyzer = AnalyzeFileUseCase<LocalFileSource, ImageHeaderInspector, FsStatReader>;

/// Builds a [`LocalAnalyzer`] over `registry`
pub fn local_analyzer(registry: Arc<SignatureRegistry>, options: AnalyzeOptions) -> LocalAnalyzer {
    AnalyzeFileUseCase::new(
        registry,
        LocalFileSource::new(),
        CategoryDispatcher::new(ImageHeaderInspector::new(), FsStatReader::new()),
        options,
    )
}
