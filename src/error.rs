//! Errors from the terminal shell
//!
//! The solver, projector and playback controller cannot fail. Everything
//! fallible lives at the edges: terminal setup, drawing and log-file setup.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HanoiError>;

#[derive(Debug, Error)]
pub enum HanoiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging already initialised: {message}")]
    Logging { message: String },
}
