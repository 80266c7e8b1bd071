//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The terminal is owned by the UI while the viewer runs, so logs are only
//! ever written to a file, and only when requested on the command line.
//!
//! # Log Levels
//!
//! - `info`: file loaded, session ended
//! - `debug`: every applied action
//! - `trace`: every render

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Length of the random part of generated log file names.
const LOG_NAME_SUFFIX_LEN: usize = 8;

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace).
    pub level: Level,
    /// File the log is appended to.
    pub log_file: PathBuf,
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0: info level
    /// - 1 (`-v`): debug level
    /// - 2+ (`-vv`): trace level
    ///
    /// Without an explicit path, a randomly named file in the system temp
    /// directory is used.
    #[must_use]
    pub fn from_verbosity(verbosity: u8, log_file: Option<PathBuf>) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            log_file: log_file.unwrap_or_else(random_log_path),
        }
    }
}

/// Returns a fresh log file path such as `/tmp/genome-explorer-x3Fq9LbA.log`.
pub fn random_log_path() -> PathBuf {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(LOG_NAME_SUFFIX_LEN)
        .map(char::from)
        .collect();
    std::env::temp_dir().join(format!("genome-explorer-{suffix}.log"))
}

/// Initialize the global tracing subscriber, writing to the configured file.
///
/// This should be called once at application startup, before the terminal
/// is switched to raw mode.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
    Ok(())
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn level to reduce noise
        EnvFilter::new(format!(
            "warn,genome_explorer={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
