//! The substitution passes, in pipeline order.
//!
//! Each pass rewrites the whole intermediate buffer once. A pass never sees
//! its own output, but later passes do rescan everything earlier passes
//! emitted, so attribute values written here must not contain markdown
//! markers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{style, table};

/// A named pass over the intermediate buffer.
pub(super) struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> Cow<'_, str>,
}

/// Passes in the order they must run.
///
/// Headings and emphasis come first, fences before anything line-oriented,
/// tables before list items, and paragraph breaks last because they remove
/// the newlines every other block pass anchors on.
pub(super) const PIPELINE: &[Pass] = &[
    Pass { name: "headings", apply: headings },
    Pass { name: "bold", apply: bold },
    Pass { name: "italic", apply: italic },
    Pass { name: "strikethrough", apply: strikethrough },
    Pass { name: "inline_code", apply: inline_code },
    Pass { name: "fenced_code", apply: fenced_code },
    Pass { name: "fenced_code_plain", apply: fenced_code_plain },
    Pass { name: "tables", apply: tables },
    Pass { name: "task_done", apply: task_done },
    Pass { name: "task_open", apply: task_open },
    Pass { name: "bullet_items", apply: bullet_items },
    Pass { name: "numbered_items", apply: numbered_items },
    Pass { name: "definitions", apply: definitions },
    Pass { name: "blockquotes", apply: blockquotes },
    Pass { name: "rules", apply: rules },
    Pass { name: "links", apply: links },
    Pass { name: "images", apply: images },
    Pass { name: "paragraphs", apply: paragraphs },
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("renderer patterns are valid")
}

// The bounded greedy marker means a `####` line can only ever be an h4.
static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^(#{1,6}) (.*)$"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));
static STRIKE: LazyLock<Regex> = LazyLock::new(|| compile(r"~~(.*?)~~"));
// Single line only, otherwise the inner backticks of a fence pair up.
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`([^`\n]+)`"));
static FENCE_LANG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)```([A-Za-z0-9_]+)\n(.*?)```"));
static FENCE_PLAIN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```\n(.*?)```"));
static TABLE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\|(.+)\|\n\|[-\s|]+\|\n((?:\|.+\|\n?)*)"));
static TASK_DONE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^([ \t]*)- \[[xX]\] (.*)$"));
static TASK_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^([ \t]*)- \[ \] (.*)$"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^([ \t]*)- (.*)$"));
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^([ \t]*)[0-9]+\. (.*)$"));
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| compile(r"([^\n]+)\n: ([^\n]+)"));
static QUOTE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^> (.*)$"));
static RULE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^(?:---|\*\*\*)$"));
// The optional `!` lets the link pass see, and skip, image syntax.
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"(!?)\[(.*?)\]\((.*?)\)"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[(.*?)\]\((.*?)\)"));

fn headings(src: &str) -> Cow<'_, str> {
    let mut ordinal = 0usize;
    HEADING.replace_all(src, |caps: &Captures<'_>| {
        let level = caps[1].len();
        let id = ordinal;
        ordinal += 1;
        format!(
            r#"<h{level} id="heading-{id}" class="{}">{}</h{level}>"#,
            style::heading_class(level),
            &caps[2]
        )
    })
}

fn bold(src: &str) -> Cow<'_, str> {
    BOLD.replace_all(src, format!(r#"<strong class="{}">${{1}}</strong>"#, style::STRONG))
}

fn italic(src: &str) -> Cow<'_, str> {
    ITALIC.replace_all(src, format!(r#"<em class="{}">${{1}}</em>"#, style::EM))
}

fn strikethrough(src: &str) -> Cow<'_, str> {
    STRIKE.replace_all(src, format!(r#"<del class="{}">${{1}}</del>"#, style::DEL))
}

fn inline_code(src: &str) -> Cow<'_, str> {
    INLINE_CODE.replace_all(
        src,
        format!(r#"<code class="{}">${{1}}</code>"#, style::INLINE_CODE),
    )
}

fn fenced_code(src: &str) -> Cow<'_, str> {
    FENCE_LANG.replace_all(
        src,
        format!(
            r#"<pre class="{}"><code class="language-${{1}} {}">${{2}}</code></pre>"#,
            style::PRE,
            style::BLOCK_CODE
        ),
    )
}

fn fenced_code_plain(src: &str) -> Cow<'_, str> {
    FENCE_PLAIN.replace_all(
        src,
        format!(
            r#"<pre class="{}"><code class="{}">${{1}}</code></pre>"#,
            style::PRE,
            style::BLOCK_CODE
        ),
    )
}

fn tables(src: &str) -> Cow<'_, str> {
    TABLE.replace_all(src, |caps: &Captures<'_>| {
        table::build(&caps[1], caps.get(2).map_or("", |m| m.as_str()))
    })
}

fn task_done(src: &str) -> Cow<'_, str> {
    TASK_DONE.replace_all(
        src,
        format!(
            r#"${{1}}<li class="{}"><input type="checkbox" checked class="{}" disabled /> <span>${{2}}</span></li>"#,
            style::TASK_ITEM,
            style::TASK_CHECKBOX
        ),
    )
}

fn task_open(src: &str) -> Cow<'_, str> {
    TASK_OPEN.replace_all(
        src,
        format!(
            r#"${{1}}<li class="{}"><input type="checkbox" class="{}" disabled /> <span>${{2}}</span></li>"#,
            style::TASK_ITEM,
            style::TASK_CHECKBOX
        ),
    )
}

fn bullet_items(src: &str) -> Cow<'_, str> {
    BULLET.replace_all(
        src,
        format!(r#"${{1}}<li class="{}">${{2}}</li>"#, style::BULLET_ITEM),
    )
}

fn numbered_items(src: &str) -> Cow<'_, str> {
    NUMBERED.replace_all(
        src,
        format!(r#"${{1}}<li class="{}">${{2}}</li>"#, style::NUMBERED_ITEM),
    )
}

fn definitions(src: &str) -> Cow<'_, str> {
    DEFINITION.replace_all(
        src,
        format!(
            r#"<dt class="{}">${{1}}</dt><dd class="{}">${{2}}</dd>"#,
            style::TERM,
            style::DEFINITION
        ),
    )
}

fn blockquotes(src: &str) -> Cow<'_, str> {
    QUOTE.replace_all(
        src,
        format!(r#"<blockquote class="{}">${{1}}</blockquote>"#, style::BLOCKQUOTE),
    )
}

fn rules(src: &str) -> Cow<'_, str> {
    RULE.replace_all(src, format!(r#"<hr class="{}" />"#, style::RULE))
}

fn links(src: &str) -> Cow<'_, str> {
    LINK.replace_all(src, |caps: &Captures<'_>| {
        if caps[1].is_empty() {
            format!(
                r#"<a href="{}" target="_blank" class="{}">{}</a>"#,
                &caps[3],
                style::LINK,
                &caps[2]
            )
        } else {
            caps[0].to_string()
        }
    })
}

fn images(src: &str) -> Cow<'_, str> {
    IMAGE.replace_all(
        src,
        format!(r#"<img alt="${{1}}" src="${{2}}" class="{}" />"#, style::IMAGE),
    )
}

fn paragraphs(src: &str) -> Cow<'_, str> {
    if !src.contains('\n') {
        return Cow::Borrowed(src);
    }
    let breaks = src.replace("\n\n", &format!(r#"</p><p class="{}">"#, style::PARAGRAPH));
    Cow::Owned(breaks.replace('\n', "<br/>"))
}
