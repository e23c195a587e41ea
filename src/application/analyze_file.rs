//! Analyze file use case
//!
//! Reads a file, matches its leading bytes, classifies the match and hands the
//! file to the category's extractor. Every per-file failure ends up in the
//! returned report, so one bad file never stops a batch.

use crate::application::dto::{AnalyzeOptions, FileReport};
use crate::domain::repositories::{FileSource, FileStatReader, ImageInspector};
use crate::domain::services::{
    CategoryDispatcher, MatchOutcome, SignatureRegistry, classify_outcome, match_signature,
};
use crate::utils::hex_preview;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Analyze file use case
pub struct AnalyzeFileUseCase<R, I, S> {
    registry: Arc<SignatureRegistry>,
    source: R,
    dispatcher: CategoryDispatcher<I, S>,
    options: AnalyzeOptions,
}

impl<R, I, S> AnalyzeFileUseCase<R, I, S>
where
    R: FileSource,
    I: ImageInspector,
    S: FileStatReader,
{
    /// Creates a new analyze file use case
    pub fn new(
        registry: Arc<SignatureRegistry>,
        source: R,
        dispatcher: CategoryDispatcher<I, S>,
        options: AnalyzeOptions,
    ) -> Self {
        Self {
            registry,
            source,
            dispatcher,
            options,
        }
    }

    /// Returns the options this use case was built with
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Reads and analyzes the file at `path`
    pub fn analyze_path(&self, path: &Path) -> FileReport {
        match self.source.read(path) {
            Ok(buffer) => self.analyze_buffer(path, &buffer),
            Err(e) => {
                tracing::warn!("{}", e);
                FileReport::unreadable(path.to_path_buf(), e.to_string())
            }
        }
    }

    /// Analyzes an already-read buffer; `path` is only passed to extractors
    pub fn analyze_buffer(&self, path: &Path, buffer: &[u8]) -> FileReport {
        let outcome = match_signature(buffer, &self.registry);
        let category = classify_outcome(&outcome);

        tracing::info!(
            path = %path.display(),
            bytes = buffer.len(),
            label = outcome.label().map(|l| l.as_str()).unwrap_or("unknown"),
            %category,
            "analyzed file"
        );

        let mut report = FileReport {
            path: path.to_path_buf(),
            size: buffer.len() as u64,
            hex_preview: hex_preview(buffer, self.options.preview_bytes),
            outcome: Some(outcome.clone()),
            category,
            extraction: None,
            error: None,
        };

        if outcome == MatchOutcome::Empty {
            return report;
        }

        match self.dispatcher.dispatch(category, path, outcome.label()) {
            Ok(extraction) => report.extraction = Some(extraction),
            Err(e) => {
                tracing::warn!("{}", e);
                report.error = Some(e.to_string());
            }
        }

        report
    }

    /// Analyzes every path, returning reports in input order
    pub fn analyze_batch(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        if self.options.parallel {
            paths.par_iter().map(|path| self.analyze_path(path)).collect()
        } else {
            paths.iter().map(|path| self.analyze_path(path)).collect()
        }
    }
}
