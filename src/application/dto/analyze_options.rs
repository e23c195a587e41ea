//! Analyze options DTO

use crate::utils::DEFAULT_PREVIEW_BYTES;

/// How reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per file
    Json,
}

/// Options for analyzing files
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Number of leading bytes shown in the hex preview
    pub preview_bytes: usize,
    /// Analyze batches on the rayon thread pool
    pub parallel: bool,
    /// Report rendering
    pub output_format: OutputFormat,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            preview_bytes: DEFAULT_PREVIEW_BYTES,
            parallel: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl AnalyzeOptions {
    /// Sets the hex preview length
    pub fn with_preview_bytes(mut self, preview_bytes: usize) -> Self {
        self.preview_bytes = preview_bytes;
        self
    }

    /// Enables parallel batch analysis
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the output format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}
