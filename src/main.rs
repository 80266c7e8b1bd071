//! Genome Explorer - Terminal DNA Sequence Viewer
//!
//! Loads a FASTA-style file into a single sequence, shows its base
//! composition, and scrolls through it with colored bases.
//!
//! ## Usage
//!
//! ```bash
//! genome-explorer <sequence_file>
//! genome-explorer --window 500 <sequence_file>
//! genome-explorer --fit-width --log <sequence_file>
//! ```
//!
//! ## Navigation
//!
//! - `j` / `Down`: scroll forward
//! - `k` / `Up`: scroll backward
//! - `q` / `Ctrl+C`: quit

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use genome_explorer::controller::run_app;
use genome_explorer::fasta::load_sequence;
use genome_explorer::logging::{init_logging, LogConfig};
use genome_explorer::model::{AppState, ViewOptions, DEFAULT_WINDOW_WIDTH};

/// Genome Explorer - a terminal viewer for DNA sequences
///
/// Header lines (starting with '>') are skipped and all remaining lines are
/// joined into one upper-cased sequence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file to display (FASTA-style)
    file: PathBuf,

    /// Number of characters shown at once
    #[arg(
        short = 'w',
        long = "window",
        default_value_t = DEFAULT_WINDOW_WIDTH,
        value_parser = parse_window
    )]
    window: usize,

    /// Size the window from the terminal instead of --window
    #[arg(long = "fit-width")]
    fit_width: bool,

    /// Use ASCII-only glyphs (no emoji or arrows)
    #[arg(long = "ascii")]
    ascii: bool,

    /// Write a log to a randomly named file in the temp directory
    #[arg(long = "log")]
    log: bool,

    /// Write the log to this file (implies --log)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parses a window size: a positive integer that fits in `usize`.
fn parse_window(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("window must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid window size `{value}`: {e}")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.log || args.log_file.is_some() {
        let config = LogConfig::from_verbosity(args.verbose, args.log_file);
        init_logging(&config).with_context(|| {
            format!("Failed to open log file {}", config.log_file.display())
        })?;
        eprintln!("Logging to {}", config.log_file.display());
    }

    let sequence = load_sequence(&args.file).with_context(|| {
        format!("Failed to read sequence file {}", args.file.display())
    })?;
    info!(path = %args.file.display(), length = sequence.len(), "loaded sequence");

    let options = ViewOptions {
        window_width: args.window,
        fit_width: args.fit_width,
        ascii: args.ascii,
    };
    run_app(AppState::with_options(sequence, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("1"), Ok(1));
        assert_eq!(parse_window("200"), Ok(200));
        assert!(parse_window("0").is_err());
        assert!(parse_window("-5").is_err());
        assert!(parse_window("abc").is_err());
        // Larger than any usize
        assert!(parse_window("100000000000000000000000").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["genome-explorer", "chr1.fa"]).unwrap();
        assert_eq!(args.window, DEFAULT_WINDOW_WIDTH);
        assert!(!args.fit_width);
        assert!(!args.ascii);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_rejects_zero_window() {
        assert!(Args::try_parse_from(["genome-explorer", "-w", "0", "chr1.fa"]).is_err());
    }
}
