//! Property-based tests for the markup transformer
//!
//! Invariants:
//! - No input can produce a tag outside the transformer's own vocabulary
//! - Output tags are always balanced and correctly nested
//! - Plain prose renders as escaped paragraphs

use super::{render, render_plain};
use proptest::prelude::*;
use regex::Regex;

const ALLOWED_TAGS: &[&str] = &[
    "<p>", "</p>", "<br>", "<ul>", "</ul>", "<li>", "</li>", "<strong>", "</strong>",
];

/// Markdown-ish fragments mixed with hostile markup
fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}",
        Just("**".to_string()),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
        Just("- ".to_string()),
        Just("• ".to_string()),
        Just("1. ".to_string()),
        Just("<script>".to_string()),
        Just("</p>".to_string()),
        Just("<li>".to_string()),
        Just("\"'&".to_string()),
        Just("&lt;".to_string()),
        Just("\r\n".to_string()),
    ]
}

fn arb_markdown() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn strip_allowed_tags(html: &str) -> String {
    ALLOWED_TAGS
        .iter()
        .fold(html.to_string(), |acc, tag| acc.replace(tag, ""))
}

/// Check nesting with a stack; `<br>` is void.
fn is_well_nested(html: &str) -> bool {
    let tag = Regex::new(r"<(/?)(p|ul|li|strong|br)>").unwrap();
    let mut stack: Vec<&str> = Vec::new();

    for caps in tag.captures_iter(html) {
        let closing = !caps[1].is_empty();
        let name = caps.get(2).unwrap().as_str();
        if name == "br" {
            continue;
        }
        if closing {
            if stack.pop() != Some(name) {
                return false;
            }
        } else {
            let parent = stack.last().copied();
            let allowed = match name {
                "li" => parent == Some("ul"),
                "ul" | "p" => parent.is_none(),
                _ => true,
            };
            if !allowed {
                return false;
            }
            stack.push(name);
        }
    }
    stack.is_empty()
}

proptest! {
    #[test]
    fn prop_no_foreign_markup(text in arb_markdown()) {
        let html = render(&text);
        let stripped = strip_allowed_tags(&html);
        prop_assert!(!stripped.contains('<'), "live markup in {html:?}");
        prop_assert!(!stripped.contains('>'), "live markup in {html:?}");
    }

    #[test]
    fn prop_output_is_well_nested(text in arb_markdown()) {
        let html = render(&text);
        prop_assert!(is_well_nested(&html), "unbalanced output {html:?}");
    }

    #[test]
    fn prop_render_is_deterministic(text in arb_markdown()) {
        prop_assert_eq!(render(&text), render(&text));
    }

    #[test]
    fn prop_whitespace_only_renders_empty(text in "[ \t\n]{0,20}") {
        prop_assert_eq!(render(&text), "");
    }

    #[test]
    fn prop_plain_prose_is_one_paragraph(text in "[a-zA-Z][a-zA-Z ,]{0,40}[a-zA-Z]") {
        prop_assert_eq!(render(&text), format!("<p>{text}</p>"));
    }

    #[test]
    fn prop_render_plain_has_single_paragraph(text in "\\PC{0,40}") {
        let html = render_plain(&text);
        let stripped = strip_allowed_tags(&html);
        prop_assert!(html.starts_with("<p>") && html.ends_with("</p>"));
        prop_assert_eq!(html.matches("<p>").count(), 1);
        prop_assert!(!stripped.contains('<'));
    }
}
