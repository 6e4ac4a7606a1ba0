//! Capture parsing: turn a serialized note snapshot into raw lines.

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::RawLine;

/// Serialization of a note capture on disk or stdin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFormat {
    /// Human-writable text snapshot (default)
    #[default]
    Text,
    /// JSON array of raw line objects
    Json,
}

/// Errors during capture parsing.
#[derive(Debug, Error)]
pub enum ParseCaptureError {
    #[error("invalid JSON capture: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses a serialized note capture into raw lines.
///
/// # Text format
/// ```text
/// Shopping
/// Some plain text
/// [ ] Milk
///     [x] Eggs
/// ```
/// Blank lines are skipped. A line whose content starts with `[ ]`, `[x]`
/// or `[X]` (after optional indentation) is a list item; leading whitespace
/// marks it as a subtask and an `x` marks it as sitting in the completed
/// section. Anything else is a plain block. The first emitted line is the
/// note's title by position, exactly as in a live capture.
///
/// A bracketed prefix that is not a well-formed checkbox (`[y]`, `[`) is
/// ordinary text; the text parser never fails.
///
/// # JSON format
/// A JSON array of raw line objects with camelCase keys; flags that are
/// absent default to false:
/// ```text
/// [{"text": "Shopping"}, {"text": "Milk", "isListItem": true}]
/// ```
///
/// # Errors
///
/// Returns `ParseCaptureError::InvalidJson` if a JSON capture does not
/// deserialize. Text captures always parse.
pub fn parse_capture(
    content: &str,
    format: CaptureFormat,
) -> Result<Vec<RawLine>, ParseCaptureError> {
    match format {
        CaptureFormat::Text => Ok(parse_text_capture(content)),
        CaptureFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

fn parse_text_capture(content: &str) -> Vec<RawLine> {
    content.lines().filter_map(parse_text_line).collect()
}

fn parse_text_line(line: &str) -> Option<RawLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = checkbox_rest(trimmed) {
        let indented = line.starts_with([' ', '\t']);
        let completed = trimmed.as_bytes()[1].eq_ignore_ascii_case(&b'x');
        return Some(RawLine::list_item(rest.trim(), indented, completed));
    }

    Some(RawLine::plain(trimmed))
}

/// Returns the text after a `[ ]` / `[x]` / `[X]` prefix, or None if the
/// line does not start with a well-formed checkbox.
fn checkbox_rest(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix("[ ]")
        .or_else(|| trimmed.strip_prefix("[x]"))
        .or_else(|| trimmed.strip_prefix("[X]"))?;

    // Require a separator (or end of line) so "[x]y" stays plain text.
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text_basic_note() {
        let lines = parse_capture("Shopping\n[ ] Milk\n    [x] Eggs\n", CaptureFormat::Text)
            .unwrap();

        assert_eq!(
            lines,
            vec![
                RawLine::plain("Shopping"),
                RawLine::list_item("Milk", false, false),
                RawLine::list_item("Eggs", true, true),
            ]
        );
    }

    #[test]
    fn test_parse_text_skips_blank_lines() {
        let lines = parse_capture("Title\n\n\nbody\n", CaptureFormat::Text).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], RawLine::plain("body"));
    }

    #[test]
    fn test_parse_text_uppercase_checkbox() {
        let lines = parse_capture("T\n[X] done\n", CaptureFormat::Text).unwrap();
        assert!(lines[1].in_completed_section);
    }

    #[test]
    fn test_parse_text_tab_indent_marks_subtask() {
        let lines = parse_capture("T\n\t[ ] sub\n", CaptureFormat::Text).unwrap();
        assert!(lines[1].is_indented);
    }

    #[test]
    fn test_parse_text_malformed_checkbox_is_plain() {
        let lines = parse_capture("T\n[y] not a task\n[x]glued\n", CaptureFormat::Text).unwrap();

        assert_eq!(lines[1], RawLine::plain("[y] not a task"));
        assert_eq!(lines[2], RawLine::plain("[x]glued"));
    }

    #[test]
    fn test_parse_text_empty_checkbox_text() {
        let lines = parse_capture("T\n[ ]\n", CaptureFormat::Text).unwrap();
        assert_eq!(lines[1], RawLine::list_item("", false, false));
    }

    #[test]
    fn test_parse_text_indented_plain_line_is_trimmed() {
        let lines = parse_capture("T\n   some note\n", CaptureFormat::Text).unwrap();
        assert_eq!(lines[1], RawLine::plain("some note"));
    }

    #[test]
    fn test_parse_text_empty_capture() {
        assert!(parse_capture("", CaptureFormat::Text).unwrap().is_empty());
        assert!(parse_capture("\n  \n", CaptureFormat::Text).unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_capture() {
        let json = r#"[
            {"text": "Shopping"},
            {"text": "Milk", "isListItem": true},
            {"text": "Eggs", "isListItem": true, "isIndented": true, "inCompletedSection": true}
        ]"#;

        let lines = parse_capture(json, CaptureFormat::Json).unwrap();
        assert_eq!(
            lines,
            vec![
                RawLine::plain("Shopping"),
                RawLine::list_item("Milk", false, false),
                RawLine::list_item("Eggs", true, true),
            ]
        );
    }

    #[test]
    fn test_parse_json_empty_array() {
        assert!(parse_capture("[]", CaptureFormat::Json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_capture("{not json", CaptureFormat::Json).unwrap_err();
        assert!(matches!(err, ParseCaptureError::InvalidJson(_)));
    }
}
