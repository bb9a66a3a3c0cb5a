//! MDH CLI - Markdown to HTML converter.
//!
//! Converts a markdown-subset file to an HTML file:
//! `mdh README.md README.html`

mod convert;
mod error;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;

/// MDH - Markdown to HTML converter.
#[derive(Parser)]
#[command(name = "mdh", version, about)]
struct Cli {
    /// Input markdown file.
    input: PathBuf,
    /// Output HTML file (overwritten if it exists).
    output: PathBuf,
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = convert::convert_file(&cli.input, &cli.output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
