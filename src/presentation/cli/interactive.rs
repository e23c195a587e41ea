//! Interactive prompt loop
//!
//! Asks for one path at a time until the user types `exit`. Each path is
//! analyzed and reported on its own; a bad path never ends the session.

use super::render::render_report;
use crate::application::AnalyzeFileUseCase;
use crate::domain::repositories::{FileSource, FileStatReader, ImageInspector};
use anyhow::{Context, Result};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::io::{BufRead, Write};
use std::path::Path;

const PROMPT: &str = "Enter the file path or type 'exit' to quit";

/// Word that ends the session
pub const EXIT_COMMAND: &str = "exit";

/// What one line of user input asks for
#[derive(Debug, PartialEq, Eq)]
pub enum PromptCommand<'a> {
    Exit,
    Skip,
    Analyze(&'a Path),
}

/// Interprets one line of input
///
/// Only the line terminator is stripped from paths; leading and trailing
/// spaces are part of the file name.
pub fn parse_command(line: &str) -> PromptCommand<'_> {
    let path = line.trim_end_matches(['\r', '\n']);
    if path.trim() == EXIT_COMMAND {
        PromptCommand::Exit
    } else if path.trim().is_empty() {
        PromptCommand::Skip
    } else {
        PromptCommand::Analyze(Path::new(path))
    }
}

/// Runs the prompt on the terminal when one is attached, otherwise reads
/// paths line by line from stdin
pub fn run_interactive<R, I, S>(analyzer: &AnalyzeFileUseCase<R, I, S>) -> Result<usize>
where
    R: FileSource,
    I: ImageInspector,
    S: FileStatReader,
{
    if console::user_attended() {
        run_terminal(analyzer)
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_lines(stdin.lock(), stdout.lock(), analyzer)
    }
}

fn run_terminal<R, I, S>(analyzer: &AnalyzeFileUseCase<R, I, S>) -> Result<usize>
where
    R: FileSource,
    I: ImageInspector,
    S: FileStatReader,
{
    let theme = ColorfulTheme::default();
    let mut analyzed = 0;

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read file path")?;

        match parse_command(&line) {
            PromptCommand::Exit => break,
            PromptCommand::Skip => continue,
            PromptCommand::Analyze(path) => {
                let report = analyzer.analyze_path(path);
                println!("{}", render_report(&report, analyzer.options().output_format)?);
                analyzed += 1;
            }
        }
    }

    Ok(analyzed)
}

/// Runs the prompt over any line source; returns the number of paths analyzed
pub fn run_lines<B, W, R, I, S>(
    mut input: B,
    mut output: W,
    analyzer: &AnalyzeFileUseCase<R, I, S>,
) -> Result<usize>
where
    B: BufRead,
    W: Write,
    R: FileSource,
    I: ImageInspector,
    S: FileStatReader,
{
    let mut analyzed = 0;
    let mut line = String::new();

    loop {
        write!(output, "{}: ", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_command(&line) {
            PromptCommand::Exit => break,
            PromptCommand::Skip => continue,
            PromptCommand::Analyze(path) => {
                let report = analyzer.analyze_path(path);
                writeln!(
                    output,
                    "{}",
                    render_report(&report, analyzer.options().output_format)?
                )?;
                analyzed += 1;
            }
        }
    }

    Ok(analyzed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_ends_the_session() {
        assert_eq!(parse_command("exit\n"), PromptCommand::Exit);
        assert_eq!(parse_command("  exit  "), PromptCommand::Exit);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("\n"), PromptCommand::Skip);
        assert_eq!(parse_command("   \r\n"), PromptCommand::Skip);
    }

    #[test]
    fn only_the_line_terminator_is_stripped() {
        assert_eq!(
            parse_command("./photo.jpg\r\n"),
            PromptCommand::Analyze(Path::new("./photo.jpg"))
        );
        assert_eq!(
            parse_command(" my photo.jpg \n"),
            PromptCommand::Analyze(Path::new(" my photo.jpg "))
        );
    }
}
