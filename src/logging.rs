//! File-backed `tracing` setup
//!
//! The TUI owns the terminal while it runs, so diagnostics go to a log file
//! instead of stderr. Filtering follows `RUST_LOG` and defaults to `info`.

use crate::error::{HanoiError, Result};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `log_file_path` (appending).
pub fn init(log_file_path: &Path) -> Result<()> {
    let log_file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_file_path)
        .map_err(|source| HanoiError::LogFile {
            path: log_file_path.to_path_buf(),
            source,
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| HanoiError::Logging {
            message: err.to_string(),
        })
}
