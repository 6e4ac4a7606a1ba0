//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::infra::CaptureFormat;
use output::OutputFormat;

/// keepclip - convert note captures and copy them to the clipboard
#[derive(Parser, Debug)]
#[command(name = "keepclip", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a note capture and print the result
    Convert(ConvertArgs),

    /// Convert a note capture and place the result on the clipboard
    Copy(CopyArgs),

    /// List the supported export formats
    Formats(FormatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `convert` command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Capture file to read ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Export format (plain, md, zim, html, csv); unrecognized values fall
    /// back to plain text
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Capture serialization of the input
    #[arg(short = 'i', long = "input-format", value_enum)]
    pub input_format: Option<CaptureFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `copy` command
#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// Capture file to read ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Export format (plain, md, zim, html, csv); unrecognized values fall
    /// back to plain text
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Capture serialization of the input
    #[arg(short = 'i', long = "input-format", value_enum)]
    pub input_format: Option<CaptureFormat>,

    /// CLI output format (for the confirmation message, not the copied text)
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Arguments for the `formats` command
#[derive(Parser, Debug)]
pub struct FormatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
