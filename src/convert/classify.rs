//! Line classification: raw captured blocks to typed lines.

use regex::Regex;

use crate::domain::{LineKind, RawLine, TypedLine};

/// Classifies an ordered capture into typed lines.
///
/// The first line is always the title regardless of its structural flags.
/// Every later line is a task or subtask when flagged as a list item
/// (indentation decides which), plain text otherwise. Completion carries
/// over from the capture's completed-section flag for task-like lines only.
///
/// The "N Completed items" subheader the host UI inserts above checked-off
/// entries is metadata, not content; any typed line whose text ends with
/// that phrase is dropped after classification, preserving the order of the
/// rest. That filter can remove the title itself if the title text matches.
///
/// # Examples
///
/// ```
/// use keepclip::convert::classify;
/// use keepclip::domain::{LineKind, RawLine};
///
/// let typed = classify(&[
///     RawLine::plain("Shopping"),
///     RawLine::list_item("Milk", false, false),
/// ]);
/// assert_eq!(typed[0].kind(), LineKind::Title);
/// assert_eq!(typed[1].kind(), LineKind::Task);
/// ```
pub fn classify(lines: &[RawLine]) -> Vec<TypedLine> {
    // "3 Completed items", "1 Completed item"; case-sensitive, end-anchored
    let subheader = Regex::new(r"Completed items?$").unwrap();

    lines
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let kind = if index == 0 {
                LineKind::Title
            } else if !raw.is_list_item {
                LineKind::Plain
            } else if raw.is_indented {
                LineKind::Subtask
            } else {
                LineKind::Task
            };

            TypedLine::new(raw.text.clone(), kind, raw.in_completed_section)
        })
        .filter(|line| !subheader.is_match(line.text()))
        .collect()
}
