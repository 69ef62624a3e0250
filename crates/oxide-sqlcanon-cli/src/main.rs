//! sqlcanon CLI
//!
//! Reads one SQL statement and prints it in canonical form.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Print SQL statements in canonical form.
#[derive(Parser)]
#[command(name = "sqlcanon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL statement (read from --file or stdin if omitted).
    sql: Option<String>,

    /// Read the statement from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Exit with status 1 instead of printing if the input is not canonical.
    #[arg(long)]
    check: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Printed the canonical form, or the input was already canonical.
    Done,
    /// `--check` found a difference.
    NotCanonical,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Self::Done => ExitCode::SUCCESS,
            Self::NotCanonical => ExitCode::from(1),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: {error}");
    }

    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let input = read_input(cli)?;
    let statement = strip_terminator(&input);
    debug!(bytes = statement.len(), "read statement");

    let canonical = oxide_sqlcanon::canonicalize(statement)?;

    if cli.check {
        if canonical == statement {
            return Ok(Outcome::Done);
        }
        debug!(%canonical, "input differs from canonical form");
        return Ok(Outcome::NotCanonical);
    }

    println!("{canonical}");
    Ok(Outcome::Done)
}

/// Reads the statement from the positional argument, `--file`, or stdin.
fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(sql) = &cli.sql {
        return Ok(sql.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

/// Trims surrounding whitespace and one trailing `;`.
fn strip_terminator(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed.strip_suffix(';').map_or(trimmed, str::trim_end)
}
