//! Data transfer objects

mod analyze_options;
mod file_report;

pub use analyze_options::{AnalyzeOptions, OutputFormat};
pub use file_report::{BatchSummary, FileReport};
