//! Format rendering: typed lines to a clipboard-ready string.

use crate::domain::{ExportFormat, LineKind, RawLine, TypedLine};

use super::classify;
use super::urls::linkify;

/// Renders typed lines into the requested format.
///
/// Lines are processed in sequence order. Markdown and HTML rewrite URLs in
/// every line, including the title; Zim and CSV drop title lines entirely.
/// Rendering is pure and deterministic: the same input always produces
/// byte-identical output.
pub fn render(lines: &[TypedLine], format: ExportFormat) -> String {
    match format {
        ExportFormat::Plain => render_plain(lines),
        ExportFormat::Markdown => render_markdown(lines),
        ExportFormat::Zim => render_zim(lines),
        ExportFormat::Html => render_html(lines),
        ExportFormat::Csv => render_csv(lines),
    }
}

/// Classifies a raw capture and renders it in one step.
///
/// # Examples
///
/// ```
/// use keepclip::convert::render_capture;
/// use keepclip::domain::{ExportFormat, RawLine};
///
/// let capture = [RawLine::plain("Shopping"), RawLine::list_item("Milk", false, false)];
/// assert_eq!(
///     render_capture(&capture, ExportFormat::Markdown),
///     "# Shopping\n- [ ] Milk"
/// );
/// ```
pub fn render_capture(lines: &[RawLine], format: ExportFormat) -> String {
    render(&classify(lines), format)
}

fn render_plain(lines: &[TypedLine]) -> String {
    lines
        .iter()
        .map(TypedLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_markdown(lines: &[TypedLine]) -> String {
    lines
        .iter()
        .map(|line| {
            let text = linkify(line.text(), ExportFormat::Markdown);
            let mark = if line.completed() { 'x' } else { ' ' };

            match line.kind() {
                LineKind::Title => format!("# {text}"),
                LineKind::Task => format!("- [{mark}] {text}"),
                LineKind::Subtask => format!("  - [{mark}] {text}"),
                LineKind::Plain => text,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_zim(lines: &[TypedLine]) -> String {
    lines
        .iter()
        .filter(|line| line.kind() != LineKind::Title)
        .map(|line| {
            let mark = if line.completed() { '*' } else { ' ' };

            match line.kind() {
                LineKind::Task => format!("[{mark}] {}", line.text()),
                LineKind::Subtask => format!("\t[{mark}] {}", line.text()),
                _ => line.text().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_html(lines: &[TypedLine]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let text = linkify(line.text(), ExportFormat::Html);

            match line.kind() {
                LineKind::Title => format!("<h1>{text}</h1>"),
                // Checkbox ids number lines by position in the full typed
                // sequence, title included, so ids of non-adjacent tasks
                // are not consecutive.
                LineKind::Task | LineKind::Subtask => {
                    let checked = if line.completed() { " checked" } else { "" };
                    format!(
                        "<input type=\"checkbox\" id=\"task-{index}\"{checked}>\
                         <label for=\"task-{index}\">{text}</label>"
                    )
                }
                LineKind::Plain => format!("<p>{text}</p>"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(lines: &[TypedLine]) -> String {
    lines
        .iter()
        .filter(|line| line.kind() != LineKind::Title)
        .map(TypedLine::text)
        .collect::<Vec<_>>()
        .join(",")
}
