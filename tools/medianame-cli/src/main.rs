//! Medianame command line
//!
//! Parses movie or series filenames given as arguments or, in batch mode,
//! one per line on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use medianame_core::{MediaNameParser, ParserConfig};
use serde::Serialize;
use tracing::{debug, warn};

/// CLI arguments
#[derive(Parser)]
#[command(name = "medianame")]
#[command(about = "Extract titles, episodes and quality from media filenames")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log cascade decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Latest year accepted as a movie release year (default: current year)
    #[arg(long, global = true)]
    max_year: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a movie filename
    Movie {
        /// Filename to parse
        name: String,
    },
    /// Parse a series episode filename
    Series {
        /// Filename or path to parse
        name: String,
    },
    /// Classify the quality tags of a fragment
    Quality {
        /// Text to classify
        fragment: String,
    },
    /// Parse names read from stdin, one JSON object per line
    Batch {
        #[arg(value_enum)]
        kind: Kind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Movie,
    Series,
}

/// Batch output line for a name that could not be parsed.
#[derive(Serialize)]
struct Failure<'a> {
    input: &'a str,
    error: String,
}

/// Series names may come with a directory; only the last segment is parsed.
fn file_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("medianame_core=debug,medianame=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ParserConfig::new();
    if let Some(year) = cli.max_year {
        config = config.with_max_year(year);
    }
    let parser = MediaNameParser::new(config).context("failed to build parser")?;
    debug!(config = ?parser.config(), "parser ready");

    match cli.command {
        Commands::Movie { name } => {
            let record = parser.parse_movie(&name);
            if cli.json {
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!("{record}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Series { name } => match parser.parse_series(file_name(&name)) {
            Ok(record) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{record}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("{err}");
                Ok(ExitCode::FAILURE)
            }
        },
        Commands::Quality { fragment } => {
            let tag = parser.classify_quality(&fragment);
            if cli.json {
                println!("{}", serde_json::to_string(&tag)?);
            } else {
                println!("{tag}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch { kind } => run_batch(&parser, kind),
    }
}

fn run_batch(parser: &MediaNameParser, kind: Kind) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut failures = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        let json = match kind {
            Kind::Movie => serde_json::to_string(&parser.parse_movie(name))?,
            Kind::Series => match parser.parse_series(file_name(name)) {
                Ok(record) => serde_json::to_string(&record)?,
                Err(err) => {
                    warn!(input = name, %err, "series parse failed");
                    failures += 1;
                    serde_json::to_string(&Failure {
                        input: name,
                        error: err.to_string(),
                    })?
                }
            },
        };
        writeln!(out, "{json}")?;
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
