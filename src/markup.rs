//! Markup transformer for message bodies
//!
//! Converts the small markdown dialect the responder writes (bold emphasis,
//! flat lists, paragraphs, line breaks) into HTML. The whole input is escaped
//! before any structural substitution runs, so nothing in a message can turn
//! into live markup. Stages, in order:
//!
//! 1. escape
//! 2. `**bold**` → `<strong>`
//! 3. list line detection (`1. x`, `- x`, `• x`)
//! 4. grouping of adjacent list lines into one `<ul>`
//! 5. paragraph segmentation on blank lines, `<br>` for single breaks
//!
//! Ordered and unordered markers both produce `<li>` inside `<ul>`.

mod escape;

#[cfg(test)]
mod proptests;

pub use escape::escape_html;

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.|[-•])[ \t]+(\S.*)$").expect("list item pattern is valid")
});

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

/// Render responder text as HTML.
///
/// Empty or whitespace-only input yields an empty string. Unbalanced `**`
/// delimiters stay as literal text.
pub fn render(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let escaped = escape_html(&normalized);
    let emphasized = BOLD.replace_all(&escaped, "<strong>$1</strong>");

    let mut html = String::with_capacity(emphasized.len() + 32);
    for block in BLANK_LINES.split(&emphasized) {
        render_block(block, &mut html);
    }
    html
}

/// Render user text: escaped, one paragraph, no markdown grammar.
pub fn render_plain(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

/// Render one blank-line-delimited block.
///
/// Runs of list lines become a `<ul>`; runs of other lines become a `<p>`.
/// A block mixing both yields sibling elements, never a list inside a
/// paragraph.
fn render_block(block: &str, html: &mut String) {
    let mut text_lines: Vec<&str> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    for line in block.split('\n') {
        if let Some(rest) = LIST_ITEM.captures(line).and_then(|c| c.get(1)) {
            flush_paragraph(&mut text_lines, html);
            items.push(rest.as_str());
        } else {
            flush_list(&mut items, html);
            text_lines.push(line);
        }
    }

    flush_paragraph(&mut text_lines, html);
    flush_list(&mut items, html);
}

fn flush_paragraph(lines: &mut Vec<&str>, html: &mut String) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    lines.clear();

    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return;
    }
    html.push_str("<p>");
    html.push_str(&trimmed.replace('\n', "<br>"));
    html.push_str("</p>");
}

fn flush_list(items: &mut Vec<&str>, html: &mut String) {
    if items.is_empty() {
        return;
    }
    html.push_str("<ul>");
    for item in items.drain(..) {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
}
