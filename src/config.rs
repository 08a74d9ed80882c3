//! Command-line configuration and disk-count validation

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Largest supported disk count
pub const MAX_DISKS: u8 = 10;

/// Why a disk count was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskCountError {
    #[error("disk count is not a number: {input:?}")]
    Unparsable { input: String },

    #[error("disk count {value} is outside 0..={max}", max = MAX_DISKS)]
    OutOfRange { value: i64 },
}

/// A validated disk count in `0..=MAX_DISKS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiskCount(u8);

impl DiskCount {
    pub const MAX: DiskCount = DiskCount(MAX_DISKS);

    pub fn new(value: u8) -> Result<Self, DiskCountError> {
        if value > MAX_DISKS {
            return Err(DiskCountError::OutOfRange {
                value: i64::from(value),
            });
        }
        Ok(DiskCount(value))
    }

    /// Strict parse of user input (surrounding whitespace allowed)
    pub fn parse(input: &str) -> Result<Self, DiskCountError> {
        let trimmed = input.trim();
        let value: i64 = trimmed.parse().map_err(|_| DiskCountError::Unparsable {
            input: trimmed.to_string(),
        })?;
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_DISKS)
            .map(DiskCount)
            .ok_or(DiskCountError::OutOfRange { value })
    }

    /// Parse user input, falling back to [`DiskCount::MAX`] on any error
    pub fn parse_or_max(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            tracing::warn!(%err, fallback = MAX_DISKS, "invalid disk count");
            DiskCount::MAX
        })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        DiskCount::MAX
    }
}

/// Step through the optimal Tower of Hanoi solution in the terminal
#[derive(Debug, Parser)]
#[command(name = "hanoi-tui", version, about)]
pub struct Cli {
    /// Number of disks (0-10); invalid values fall back to 10
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub disks: Option<String>,

    /// Where to write the diagnostic log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Disk count after applying the fallback policy
    pub fn disk_count(&self) -> DiskCount {
        self.disks
            .as_deref()
            .map_or(DiskCount::MAX, DiskCount::parse_or_max)
    }

    /// Log file path, defaulting to `hanoi-tui.log` in the temp directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("hanoi-tui.log"))
    }
}
