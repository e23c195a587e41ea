use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::sync::Arc;
use tracing::Level;

use fsniff::application::dto::BatchSummary;
use fsniff::presentation::cli::{
    Cli, Commands, ReportArgs, render_report, render_signatures, render_summary, run_interactive,
};
use fsniff::{OutputFormat, SignatureRegistry, local_analyzer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    let registry = Arc::new(
        SignatureRegistry::with_seed_signatures().context("Failed to build signature registry")?,
    );

    match cli.command {
        Some(Commands::Analyze {
            paths,
            report,
            parallel,
        }) => {
            let analyzer = local_analyzer(registry, report.to_options(parallel));
            let reports = analyzer.analyze_batch(&paths);
            let format = analyzer.options().output_format;

            for report in &reports {
                println!("{}", render_report(report, format)?);
            }

            if format == OutputFormat::Text && reports.len() > 1 {
                let summary = BatchSummary::from_reports(&reports);
                println!("{}", style(render_summary(&summary)).cyan());
            }
        }
        Some(Commands::Interactive { report }) => {
            let analyzer = local_analyzer(registry, report.to_options(false));
            run_interactive(&analyzer)?;
        }
        Some(Commands::ListSignatures) => {
            print!("{}", render_signatures(&registry));
        }
        None => {
            let analyzer = local_analyzer(registry, ReportArgs::default().to_options(false));
            run_interactive(&analyzer)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
