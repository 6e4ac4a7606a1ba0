//! Handler for the `convert` command.

use anyhow::{Context, Result};

use crate::cli::ConvertArgs;
use crate::cli::config::Config;
use crate::convert::{classify, render};

use super::{read_capture, resolve_formats};

/// Handle the `convert` command.
pub fn handle_convert(args: &ConvertArgs, config: &Config, verbose: bool) -> Result<()> {
    let (format, capture_format) = resolve_formats(config, args.format.as_deref(), args.input_format);

    let raw = read_capture(args.file.as_ref(), capture_format, verbose)?;
    let typed = classify(&raw);
    let rendered = render(&typed, format);

    if verbose {
        eprintln!(
            "rendered {} lines as {} ({} bytes)",
            typed.len(),
            format.label(),
            rendered.len()
        );
    }

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
