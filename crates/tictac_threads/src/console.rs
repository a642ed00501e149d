//! Terminal output: the board after each move and the final verdict.

use crate::driver::GameReport;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tictac_board::{Board, Outcome};

/// How the final result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Board followed by a one-line verdict.
    #[default]
    Text,
    /// The full [`GameReport`] as JSON.
    Json,
}

/// Writes the board to stdout, optionally clearing the terminal first.
pub fn render(board: &Board, clear_screen: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if clear_screen {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    write!(stdout, "{board}")?;
    stdout.flush()
}

/// Formats the final board followed by the verdict line.
pub fn verdict(board: &Board, outcome: Outcome) -> String {
    format!("{board}{outcome}\n")
}

/// Prints the result of a finished game to stdout.
pub fn print_report(
    report: &GameReport,
    format: OutputFormat,
    clear_screen: bool,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, report, format, clear_screen)
}

/// Writes the result of a finished game to `out`.
pub fn write_report(
    out: &mut impl Write,
    report: &GameReport,
    format: OutputFormat,
    clear_screen: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if clear_screen {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            write!(out, "{}", verdict(report.board(), *report.outcome()))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
