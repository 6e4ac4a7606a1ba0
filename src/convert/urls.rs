//! URL rewriting for formats with a link syntax.

use regex::Regex;

use crate::domain::ExportFormat;

/// Rewrites every URL in a line of text into the target format's link syntax.
///
/// A URL is an `http://` or `https://` run of non-whitespace containing at
/// least one literal dot, so `http://localhost` passes through untouched.
/// Only Markdown and HTML have a link syntax; for every other format the
/// text is returned unchanged.
///
/// # Examples
///
/// ```
/// use keepclip::convert::linkify;
/// use keepclip::domain::ExportFormat;
///
/// assert_eq!(
///     linkify("see https://example.com/path", ExportFormat::Markdown),
///     "see [https://example.com/path](https://example.com/path)"
/// );
/// ```
pub fn linkify(text: &str, format: ExportFormat) -> String {
    let template = match format {
        ExportFormat::Markdown => "[$0]($0)",
        ExportFormat::Html => r#"<a href="$0">$0</a>"#,
        _ => return text.to_string(),
    };

    let urls = Regex::new(r"https?://\S+?\.\S+").unwrap();
    urls.replace_all(text, template).into_owned()
}
