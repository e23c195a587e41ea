//! Report rendering

use crate::application::dto::{BatchSummary, FileReport, OutputFormat};
use crate::domain::entities::{Extraction, FileStats};
use crate::domain::services::{MatchOutcome, SignatureRegistry, classify};
use crate::utils::format_bytes;
use chrono::{DateTime, Local};
use console::style;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a report in the requested format
pub fn render_report(report: &FileReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Human-readable report
pub fn render_text(report: &FileReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        style("File:").bold(),
        report.path.display()
    ));

    let Some(outcome) = &report.outcome else {
        if let Some(error) = &report.error {
            out.push_str(&format!("{} {}\n", style("[!]").red(), error));
        }
        return out;
    };

    out.push_str("Contents of the file:\n");
    out.push_str(&report.hex_preview);
    out.push('\n');

    match outcome {
        MatchOutcome::Empty => {
            out.push_str(&format!("{}\n", style("File is empty").yellow()));
            return out;
        }
        MatchOutcome::NoMatch => {
            out.push_str(&format!("{}\n", style("Unknown file type").yellow()));
        }
        MatchOutcome::Matched(label) => {
            out.push_str(&format!(
                "File belongs to {} category, Format: {}\n",
                style(report.category).green(),
                label
            ));
        }
    }

    match &report.extraction {
        Some(Extraction::Image(image)) => {
            out.push_str(&format!("Width: {}\n", image.width));
            out.push_str(&format!("Height: {}\n", image.height));
            out.push_str(&format!(
                "Color Space: {} ({} channels)\n",
                image.color_space, image.channels
            ));
        }
        Some(Extraction::Audio(stats)) | Some(Extraction::Document(stats)) => {
            write_stats(&mut out, stats);
        }
        // A matched label already named its category above.
        Some(Extraction::Unknown) if !outcome.is_match() => {
            out.push_str("File belongs to Unknown category\n");
        }
        Some(Extraction::Unknown) => {}
        None => {}
    }

    if let Some(error) = &report.error {
        out.push_str(&format!("{} {}\n", style("[!]").red(), error));
    }

    out
}

fn write_stats(out: &mut String, stats: &FileStats) {
    out.push_str(&format!(
        "Size: {} bytes ({})\n",
        stats.size,
        format_bytes(stats.size)
    ));
    out.push_str(&format!(
        "Created: {}\n",
        format_timestamp(stats.created.as_ref())
    ));
    out.push_str(&format!(
        "Modified: {}\n",
        format_timestamp(stats.modified.as_ref())
    ));
}

fn format_timestamp(timestamp: Option<&DateTime<Local>>) -> String {
    timestamp
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "unavailable".to_string())
}

/// One-line batch summary
pub fn render_summary(summary: &BatchSummary) -> String {
    format!(
        "{} files: {} identified, {} unknown, {} empty, {} failed",
        summary.files, summary.identified, summary.unknown, summary.empty, summary.failed
    )
}

/// Registry listing with the category of each label
pub fn render_signatures(registry: &SignatureRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:<8} {}\n",
        "SIGNATURE", "LABEL", "CATEGORY"
    ));
    out.push_str(&"-".repeat(44));
    out.push('\n');
    for (signature, label) in registry {
        out.push_str(&format!(
            "{:<24} {:<8} {}\n",
            signature.to_string(),
            label.as_str(),
            classify(label.as_str())
        ));
    }
    out
}
