//! keepclip - convert note captures and copy them to the clipboard

pub mod cli;
pub mod clipboard;
pub mod convert;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_convert, handle_copy, handle_formats},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Convert(args) => handle_convert(args, &config, verbose),
        Command::Copy(args) => handle_copy(args, &config, verbose),
        Command::Formats(args) => handle_formats(args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
