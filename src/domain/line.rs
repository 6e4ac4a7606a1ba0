//! Line types: raw captured lines and their classified counterparts.

use serde::{Deserialize, Serialize};

/// One content block of a captured note, as reported by the capture source.
///
/// A capture is an ordered sequence of `RawLine`s matching the note's visual
/// top-to-bottom order. The first line of a capture is always the note's
/// title; the structural flags on it are ignored during classification.
///
/// The serde representation uses camelCase keys so that captures written by
/// a browser-side scraper deserialize directly:
///
/// ```
/// use keepclip::domain::RawLine;
///
/// let line: RawLine =
///     serde_json::from_str(r#"{"text":"Milk","isListItem":true}"#).unwrap();
/// assert!(line.is_list_item);
/// assert!(!line.is_indented);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLine {
    /// Trimmed visible text of the block.
    pub text: String,

    /// Whether the block is marked as a checkbox list entry.
    pub is_list_item: bool,

    /// Whether the block is visually shifted right relative to its list.
    pub is_indented: bool,

    /// Whether the block sits under an expanded "completed items" group.
    pub in_completed_section: bool,
}

impl RawLine {
    /// Creates a plain text block with no structural flags set.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a checkbox list entry.
    pub fn list_item(text: impl Into<String>, indented: bool, completed: bool) -> Self {
        Self {
            text: text.into(),
            is_list_item: true,
            is_indented: indented,
            in_completed_section: completed,
        }
    }
}

/// The classified role of a line within a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The note's title, always the first line of a capture.
    Title,
    /// Free-form text outside any checkbox list.
    Plain,
    /// A top-level checkbox list entry.
    Task,
    /// A checkbox list entry nested one level deeper.
    Subtask,
}

impl LineKind {
    /// Returns true for `Task` and `Subtask`.
    pub fn is_task_like(self) -> bool {
        matches!(self, LineKind::Task | LineKind::Subtask)
    }
}

/// A classified line, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedLine {
    text: String,
    kind: LineKind,
    completed: bool,
}

impl TypedLine {
    /// Creates a typed line.
    ///
    /// The completion flag is only meaningful for task-like kinds; it is
    /// forced to `false` for `Title` and `Plain`.
    pub fn new(text: impl Into<String>, kind: LineKind, completed: bool) -> Self {
        Self {
            text: text.into(),
            kind,
            completed: completed && kind.is_task_like(),
        }
    }

    /// Returns the line's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the line's classified kind.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns whether the line is a checked-off task or subtask.
    pub fn completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_line_plain_has_no_flags() {
        let line = RawLine::plain("hello");
        assert_eq!(line.text, "hello");
        assert!(!line.is_list_item);
        assert!(!line.is_indented);
        assert!(!line.in_completed_section);
    }

    #[test]
    fn test_raw_line_list_item() {
        let line = RawLine::list_item("Eggs", true, true);
        assert!(line.is_list_item);
        assert!(line.is_indented);
        assert!(line.in_completed_section);
    }

    #[test]
    fn test_raw_line_deserializes_camel_case_with_defaults() {
        let line: RawLine = serde_json::from_str(r#"{"text":"Note body"}"#).unwrap();
        assert_eq!(line.text, "Note body");
        assert!(!line.is_list_item);

        let line: RawLine = serde_json::from_str(
            r#"{"text":"Eggs","isListItem":true,"isIndented":true,"inCompletedSection":true}"#,
        )
        .unwrap();
        assert!(line.is_list_item);
        assert!(line.is_indented);
        assert!(line.in_completed_section);
    }

    #[test]
    fn test_typed_line_forces_completed_false_for_non_tasks() {
        assert!(!TypedLine::new("t", LineKind::Title, true).completed());
        assert!(!TypedLine::new("p", LineKind::Plain, true).completed());
        assert!(TypedLine::new("t", LineKind::Task, true).completed());
        assert!(TypedLine::new("s", LineKind::Subtask, true).completed());
    }

    #[test]
    fn test_line_kind_is_task_like() {
        assert!(LineKind::Task.is_task_like());
        assert!(LineKind::Subtask.is_task_like());
        assert!(!LineKind::Title.is_task_like());
        assert!(!LineKind::Plain.is_task_like());
    }
}
