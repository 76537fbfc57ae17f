//! Report rendering for the terminal.
//!
//! Human output is one line per matched pattern (`pattern: N occurrences`,
//! spans appended with `--spans`), grouped under a colored filename
//! heading when scanning files. `--json` swaps all of it for the serde
//! representation on stdout.

use crate::matcher::SearchReport;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one report in human-readable form. Prints nothing when the
/// report is empty.
pub fn print_report(
    heading: Option<&Path>,
    report: &SearchReport,
    color: bool,
    spans: bool,
) -> io::Result<()> {
    if report.is_empty() {
        return Ok(());
    }

    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Some(path) = heading {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", path.display())?;
        stdout.reset()?;
    }

    for entry in report {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", entry.pattern)?;
        stdout.reset()?;
        write!(
            stdout,
            ": {} occurrence{}",
            entry.count,
            if entry.count == 1 { "" } else { "s" }
        )?;

        if spans {
            write!(stdout, " at ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            for (i, (start, end)) in entry.occurrences.iter().enumerate() {
                if i > 0 {
                    write!(stdout, ", ")?;
                }
                write!(stdout, "{}-{}", start, end)?;
            }
            stdout.reset()?;
        }
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print per-file reports with a blank line between files. Files without
/// matches are absent from `results` and produce no output.
pub fn print_file_reports(
    results: &[(PathBuf, SearchReport)],
    color: bool,
    spans: bool,
) -> io::Result<()> {
    for (i, (path, report)) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_report(Some(path), report, color, spans)?;
    }
    Ok(())
}

/// Serialize any value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    writeln!(stdout)
}
