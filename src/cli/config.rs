//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::ExportFormat;
use crate::infra::CaptureFormat;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default export format key (e.g. "md")
    pub format: Option<String>,

    /// Default capture serialization for input
    pub input: Option<CaptureFormat>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/keepclip/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepclip")
            .join("config.toml")
    }

    /// Resolve the export format, with the CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--format` argument
    /// 2. Config file `format` setting
    /// 3. Plain text
    ///
    /// Both sources are parsed lossily: an unrecognized key degrades to
    /// plain text rather than erroring.
    pub fn export_format(&self, cli_format: Option<&str>) -> ExportFormat {
        cli_format
            .or(self.format.as_deref())
            .map(ExportFormat::parse_lossy)
            .unwrap_or_default()
    }

    /// Resolve the capture input format, with the CLI argument taking
    /// precedence over the config file setting.
    pub fn capture_format(&self, cli_input: Option<CaptureFormat>) -> CaptureFormat {
        cli_input.or(self.input).unwrap_or_default()
    }
}
