//! Handler for the `copy` command.

use anyhow::Result;

use crate::cli::CopyArgs;
use crate::cli::config::Config;
use crate::cli::output::{CopyResult, Output, OutputFormat};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::convert::{classify, render};

use super::{read_capture, resolve_formats};

/// Handle the `copy` command.
pub fn handle_copy(args: &CopyArgs, config: &Config, verbose: bool) -> Result<()> {
    let mut sink = SystemClipboard::new()?;
    handle_copy_with_sink(args, config, verbose, &mut sink)
}

/// Copy implementation over an arbitrary sink.
///
/// The clipboard write either completes or fails before this returns; there
/// are no retries and no partial writes.
pub fn handle_copy_with_sink(
    args: &CopyArgs,
    config: &Config,
    verbose: bool,
    sink: &mut dyn ClipboardSink,
) -> Result<()> {
    let (format, capture_format) = resolve_formats(config, args.format.as_deref(), args.input_format);

    let raw = read_capture(args.file.as_ref(), capture_format, verbose)?;
    let typed = classify(&raw);
    let rendered = render(&typed, format);

    sink.set_text(&rendered)?;

    let result = CopyResult {
        format: format.key().to_string(),
        lines: typed.len(),
        bytes: rendered.len(),
    };

    match args.cli_format {
        OutputFormat::Human => {
            println!(
                "Copied {} lines to the clipboard as {}",
                result.lines,
                format.label()
            );
        }
        OutputFormat::Json => {
            let out = Output::new(result);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
