//! Parse a BSDL file and generate a pin-map CSV from it for PCB tooling.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Convert a BSDL file into a pin-map CSV table
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// BSDL file to parse
    input: PathBuf,

    /// File to write to (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    debug!(input = %cli.input.display(), "reading BSDL");
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    // Conversion is atomic: nothing is written unless the whole table built
    let rows = bsdl_pinmap::convert(&text)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    let csv = bsdl_pinmap::to_csv_string(&rows);

    match &cli.output {
        Some(path) => fs::write(path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(csv.as_bytes())?,
    }

    Ok(())
}
