//! Markdown to HTML rendering.
//!
//! The renderer is a fixed chain of whole-buffer pattern substitutions:
//! - Headings, then inline emphasis
//! - Fenced code, tables, list items, definition lists
//! - Blockquotes and rules, then links and images
//! - Paragraph and line breaks last
//!
//! It is deliberately not a `CommonMark` parser. Input that straddles pass
//! boundaries (markdown inside a fence, for example) is rewritten by later
//! passes, and malformed constructs fall through as literal text. Every
//! input produces some HTML; nothing here can fail.

mod passes;
pub mod style;
pub mod table;

use std::time::Instant;

use passes::PIPELINE;

/// Switches that change renderer output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `"` and `'` in the source before any pass runs.
    ///
    /// Off by default: authored HTML and attribute values pass through
    /// untouched. `>` is left alone so blockquote markers still match.
    pub escape_html: bool,
}

impl RenderOptions {
    /// Options with source escaping enabled.
    pub const fn escaped() -> Self {
        Self { escape_html: true }
    }
}

/// Render markdown source to an HTML fragment with default options.
///
/// The result is always wrapped in a single outer paragraph, so an empty
/// source renders as one empty paragraph.
pub fn render(markdown: &str) -> String {
    render_with(markdown, &RenderOptions::default())
}

/// Render markdown source to an HTML fragment.
pub fn render_with(markdown: &str, options: &RenderOptions) -> String {
    let started = Instant::now();
    let mut html = markdown.replace("\r\n", "\n");
    if options.escape_html {
        html = escape_html(&html);
    }

    for pass in PIPELINE {
        let pass_started = Instant::now();
        let next = (pass.apply)(&html).into_owned();
        tracing::trace!(
            pass = pass.name,
            micros = pass_started.elapsed().as_micros(),
            "render pass"
        );
        html = next;
    }

    tracing::trace!(
        bytes_in = markdown.len(),
        bytes_out = html.len(),
        micros = started.elapsed().as_micros(),
        "render complete"
    );
    format!(r#"<p class="{}">{html}</p>"#, style::PARAGRAPH)
}

/// Escape the characters that open tags or break out of attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
