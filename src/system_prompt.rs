//! System prompt for the responder service
//!
//! A short built-in prompt is used unless a prompt file is configured. The
//! formatting guidance matches the dialect the client renders: `**bold**`,
//! numbered or dashed list lines, and blank lines between paragraphs.

use std::path::Path;

/// Built-in prompt establishing the assistant's role
pub const DEFAULT_SYSTEM_PROMPT: &str = r"You are a property assistant: a calm, professional, customer-facing assistant for property inspection enquiries such as dampness, leakage, structural cracks, plumbing issues, and external wall damage.

Understand the customer's issue, ask a clarifying question about location, duration, or trigger when details are missing, and suggest safe, non-invasive next steps like monitoring the area, checking nearby plumbing, ensuring ventilation, and taking photographs. Recommend a professional inspection when needed.

Never claim to have inspected the property, give cost estimates, state a definite cause, or promise outcomes or timelines. If uncertain, say the issue would require an on-site inspection to confirm. Keep answers short and in everyday language.

Formatting:
- Use **double asterisks** for emphasis.
- Put each list item on its own line starting with a number and a period, or a dash.
- Separate paragraphs with a blank line.
- Do not use HTML, headings, tables, or code blocks.";

/// Load the system prompt, preferring `path` when given.
///
/// An empty or whitespace-only file falls back to the built-in prompt.
pub fn load_system_prompt(path: Option<&Path>) -> std::io::Result<String> {
    let Some(path) = path else {
        return Ok(DEFAULT_SYSTEM_PROMPT.to_string());
    };

    let content = std::fs::read_to_string(path)?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        tracing::warn!(path = %path.display(), "System prompt file is empty, using built-in prompt");
        return Ok(DEFAULT_SYSTEM_PROMPT.to_string());
    }

    tracing::info!(path = %path.display(), chars = trimmed.chars().count(), "Loaded system prompt");
    Ok(trimmed.to_string())
}
