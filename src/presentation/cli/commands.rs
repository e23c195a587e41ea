//! CLI commands using clap

use crate::application::dto::{AnalyzeOptions, OutputFormat};
use crate::utils::DEFAULT_PREVIEW_BYTES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fsniff - File Type Identifier
///
/// Identifies files by their magic numbers and reports image dimensions or
/// filesystem metadata depending on the detected category.
#[derive(Parser)]
#[command(name = "fsniff")]
#[command(version)]
#[command(about = "Identify files by their magic numbers", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Runs the interactive prompt when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more files
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,

        /// Analyze files in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Prompt for file paths until `exit` is entered
    Interactive {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// List known signatures in match order
    ListSignatures,
}

/// Report rendering flags shared by the analysis commands
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Number of leading bytes shown in the hex preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_BYTES)]
    pub preview_bytes: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            json: false,
            preview_bytes: DEFAULT_PREVIEW_BYTES,
        }
    }
}

impl ReportArgs {
    /// Builds analyze options from the flags
    pub fn to_options(&self, parallel: bool) -> AnalyzeOptions {
        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        AnalyzeOptions::default()
            .with_preview_bytes(self.preview_bytes)
            .with_parallel(parallel)
            .with_output_format(output_format)
    }
}
