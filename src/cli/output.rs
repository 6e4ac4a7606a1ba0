//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single export format in listing output.
#[derive(Debug, Serialize)]
pub struct FormatListing {
    pub key: String,
    pub label: String,
}

/// Result of a copy operation.
#[derive(Debug, Serialize)]
pub struct CopyResult {
    /// Export format used
    pub format: String,
    /// Number of typed lines rendered
    pub lines: usize,
    /// Size of the copied text in bytes
    pub bytes: usize,
}
