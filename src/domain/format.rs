//! Export format enumeration and lossy parsing.

use std::fmt;

/// The target format for a rendered note.
///
/// A fixed, closed set. There is deliberately no fallible parse: format
/// selection comes from outside the core (CLI flags, config files) and any
/// unrecognized value degrades to plain text instead of erroring.
///
/// # Examples
///
/// ```
/// use keepclip::domain::ExportFormat;
///
/// assert_eq!(ExportFormat::parse_lossy("md"), ExportFormat::Markdown);
/// assert_eq!(ExportFormat::parse_lossy("bogus"), ExportFormat::Plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text, one line per block.
    #[default]
    Plain,
    /// Markdown with `- [ ]` / `- [x]` task lists.
    Markdown,
    /// Zim desktop wiki markup.
    Zim,
    /// A standalone HTML fragment with checkbox inputs.
    Html,
    /// A flat comma-separated list of line texts.
    Csv,
}

impl ExportFormat {
    /// All formats, in menu display order.
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Plain,
        ExportFormat::Markdown,
        ExportFormat::Zim,
        ExportFormat::Html,
        ExportFormat::Csv,
    ];

    /// Parses a format key, degrading to `Plain` on anything unrecognized.
    ///
    /// Matching is case-insensitive and accepts a few common aliases
    /// (`text`/`txt` for plain, `markdown` for `md`).
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => ExportFormat::Markdown,
            "zim" => ExportFormat::Zim,
            "html" => ExportFormat::Html,
            "csv" => ExportFormat::Csv,
            _ => ExportFormat::Plain,
        }
    }

    /// Returns the canonical short key for the format.
    pub fn key(self) -> &'static str {
        match self {
            ExportFormat::Plain => "plain",
            ExportFormat::Markdown => "md",
            ExportFormat::Zim => "zim",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }

    /// Returns the human-readable label for the format.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Plain => "Plain text",
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Zim => "Zim markup",
            ExportFormat::Html => "HTML",
            ExportFormat::Csv => "CSV",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
