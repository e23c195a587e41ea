//! CLI module

mod commands;
mod interactive;
mod render;

pub use commands::{Cli, Commands, ReportArgs};
pub use interactive::{EXIT_COMMAND, PromptCommand, parse_command, run_interactive, run_lines};
pub use render::{render_report, render_signatures, render_summary, render_text};
