//! Command handlers for the CLI.

mod convert;
mod copy;
mod formats;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::config::Config;
use crate::domain::RawLine;
use crate::infra::{CaptureFormat, parse_capture};

// Re-export public items
pub use convert::handle_convert;
pub use copy::{handle_copy, handle_copy_with_sink};
pub use formats::handle_formats;

// ===========================================
// Shared Utilities
// ===========================================

/// Reads and parses a note capture from a file or stdin.
///
/// A missing path or `-` reads stdin; anything else is treated as a path.
pub(crate) fn read_capture(
    file: Option<&PathBuf>,
    capture_format: CaptureFormat,
    verbose: bool,
) -> Result<Vec<RawLine>> {
    let content = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read capture file: {}", path.display()))?,
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read capture from stdin")?;
            content
        }
    };

    let lines = parse_capture(&content, capture_format).context("failed to parse capture")?;

    if verbose {
        eprintln!("parsed {} raw lines", lines.len());
    }

    Ok(lines)
}

/// Resolves export format and capture format from CLI args and config.
pub(crate) fn resolve_formats(
    config: &Config,
    cli_format: Option<&str>,
    cli_input: Option<CaptureFormat>,
) -> (crate::domain::ExportFormat, CaptureFormat) {
    (
        config.export_format(cli_format),
        config.capture_format(cli_input),
    )
}
