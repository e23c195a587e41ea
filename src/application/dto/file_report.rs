//! File report DTO

use crate::domain::entities::{Category, Extraction};
use crate::domain::services::MatchOutcome;
use serde::Serialize;
use std::path::PathBuf;

/// Everything learned about one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given by the caller
    pub path: PathBuf,
    /// Bytes read from the file
    pub size: u64,
    /// Leading bytes as lowercase hex
    pub hex_preview: String,
    /// Matcher outcome; `None` when the file could not be read
    pub outcome: Option<MatchOutcome>,
    /// Category derived from the outcome
    pub category: Category,
    /// Extractor output; `None` for empty or unreadable files and failed extractions
    pub extraction: Option<Extraction>,
    /// Read or extraction failure, if any
    pub error: Option<String>,
}

impl FileReport {
    /// Report for a file that could not be read
    pub fn unreadable(path: PathBuf, error: String) -> Self {
        Self {
            path,
            size: 0,
            hex_preview: String::new(),
            outcome: None,
            category: Category::Unknown,
            extraction: None,
            error: Some(error),
        }
    }

    /// Whether the file was read and any extraction succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts over a batch of reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub files: usize,
    pub identified: usize,
    pub unknown: usize,
    pub empty: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self {
            files: reports.len(),
            ..Self::default()
        };

        for report in reports {
            match &report.outcome {
                Some(MatchOutcome::Matched(_)) => summary.identified += 1,
                Some(MatchOutcome::NoMatch) => summary.unknown += 1,
                Some(MatchOutcome::Empty) => summary.empty += 1,
                None => {}
            }
            if report.error.is_some() {
                summary.failed += 1;
            }
        }

        summary
    }
}
