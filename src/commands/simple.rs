//! Simple interactive CLI mode
//!
//! Text-based word finder without TUI

use crate::core::ScoredWord;
use crate::finder::{FinderType, WordFinder};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How many matches are printed per query
const SHOWN_MATCHES: usize = 20;

/// Outcome of one line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    Quit,
    Help,
    Stats,
    Skip,
    Query(String),
}

/// Classify a line of user input
#[must_use]
pub fn parse_input(line: &str) -> ReplAction {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "" => ReplAction::Skip,
        ":q" | ":quit" | ":exit" => ReplAction::Quit,
        ":h" | ":help" | "?" => ReplAction::Help,
        ":stats" => ReplAction::Stats,
        _ => ReplAction::Query(input.to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(finder: &FinderType) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(finder, stdin.lock(), &mut stdout.lock())
}

/// Run the REPL on arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_repl<R: BufRead, W: Write>(finder: &FinderType, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Word Finder - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type the letters you hold and I'll list every word they spell,")?;
    writeln!(out, "best scoring first. Commands: ':help', ':stats', ':quit'\n")?;

    let mut lines = input.lines();

    loop {
        write!(out, "{}: ", "Letters".bright_cyan())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };

        match parse_input(&line?) {
            ReplAction::Quit => {
                writeln!(out, "\n👋 Bye!\n")?;
                return Ok(());
            }
            ReplAction::Help => {
                writeln!(out, "  Letters are case-insensitive; anything outside a-z is ignored.")?;
                writeln!(out, "  Repeat a letter to allow it more than once (e.g. 'hello').")?;
                writeln!(out, "  ':stats' shows the index size, ':quit' exits.\n")?;
            }
            ReplAction::Stats => {
                let stats = finder.stats();
                writeln!(
                    out,
                    "  Engine: {} | words added: {} | stored: {}\n",
                    finder.name(),
                    stats.words_added,
                    stats.stored
                )?;
            }
            ReplAction::Skip => {}
            ReplAction::Query(letters) => {
                let matches = finder.find_scored(&letters);
                write_matches(out, &matches)?;
            }
        }
    }
}

fn write_matches<W: Write>(out: &mut W, matches: &[ScoredWord]) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(out, "  {}\n", "No words found".yellow())?;
        return Ok(());
    }

    writeln!(out, "  {} words found", matches.len().to_string().bright_green().bold())?;
    for m in matches.iter().take(SHOWN_MATCHES) {
        writeln!(out, "  • {:<16} {:>3}", m.word.to_uppercase(), m.score)?;
    }
    if matches.len() > SHOWN_MATCHES {
        writeln!(out, "  … and {} more", matches.len() - SHOWN_MATCHES)?;
    }
    writeln!(out)
}
