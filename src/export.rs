//! Download payloads for the current document.

use crate::render::{self, RenderOptions};

/// Output format for an export.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Html,
    Markdown,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    /// MIME type of the payload.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html;charset=utf-8",
            Self::Markdown => "text/markdown;charset=utf-8",
        }
    }
}

/// The source exactly as written, UTF-8 encoded.
pub fn to_markdown_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// A standalone HTML page with the rendered document and `title`.
pub fn to_html_document(text: &str, title: &str) -> Vec<u8> {
    to_html_document_with(text, title, &RenderOptions::default())
}

/// Like [`to_html_document`], rendering with `options`.
///
/// The title is always escaped, whatever `options` says about the body.
pub fn to_html_document_with(text: &str, title: &str, options: &RenderOptions) -> Vec<u8> {
    let body = render::render_with(text, options);
    let title = render::escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
    <div class="max-w-4xl mx-auto p-8">
        <div class="prose prose-lg dark:prose-invert max-w-none">
            {body}
        </div>
    </div>
</body>
</html>"#
    )
    .into_bytes()
}

/// Export `text` in `format`.
pub fn export(text: &str, title: &str, format: ExportFormat) -> Vec<u8> {
    export_with(text, title, format, &RenderOptions::default())
}

/// Export `text` in `format`, rendering HTML with `options`.
pub fn export_with(
    text: &str,
    title: &str,
    format: ExportFormat,
    options: &RenderOptions,
) -> Vec<u8> {
    tracing::debug!(?format, title, bytes = text.len(), "export");
    match format {
        ExportFormat::Html => to_html_document_with(text, title, options),
        ExportFormat::Markdown => to_markdown_bytes(text),
    }
}

/// Download file name for a document called `name`.
pub fn export_file_name(name: &str, format: ExportFormat) -> String {
    format!("{name}.{}", format.extension())
}
