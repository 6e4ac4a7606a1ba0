//! Handler for the `formats` command.

use anyhow::Result;

use crate::cli::FormatsArgs;
use crate::cli::output::{FormatListing, Output, OutputFormat};
use crate::domain::ExportFormat;

/// Handle the `formats` command.
pub fn handle_formats(args: &FormatsArgs) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            for format in ExportFormat::ALL {
                println!("{:<6} {}", format.key(), format.label());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<FormatListing> = ExportFormat::ALL
                .iter()
                .map(|f| FormatListing {
                    key: f.key().to_string(),
                    label: f.label().to_string(),
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
