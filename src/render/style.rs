//! Tailwind class lists for rendered markdown elements.
//!
//! Every element the renderer emits carries utility classes with `dark:`
//! variants, so the preview follows the host page's theme without the
//! renderer knowing which theme is active.

/// Classes for a heading of the given level.
///
/// Levels outside `1..=6` fall back to the smallest heading style.
pub const fn heading_class(level: usize) -> &'static str {
    match level {
        1 => "text-5xl font-bold text-gray-900 dark:text-gray-100 mt-8 mb-6",
        2 => "text-4xl font-bold text-gray-900 dark:text-gray-100 mt-8 mb-4",
        3 => "text-3xl font-semibold text-gray-800 dark:text-gray-200 mt-6 mb-4",
        4 => "text-2xl font-semibold text-gray-800 dark:text-gray-200 mt-6 mb-3",
        5 => "text-xl font-semibold text-gray-800 dark:text-gray-200 mt-6 mb-3",
        _ => "text-lg font-semibold text-gray-800 dark:text-gray-200 mt-6 mb-3",
    }
}

// Inline emphasis
pub const STRONG: &str = "font-bold";
pub const EM: &str = "italic";
pub const DEL: &str = "line-through text-gray-500 dark:text-gray-400";
pub const INLINE_CODE: &str = "bg-gray-100 dark:bg-gray-700 px-2 py-1 rounded text-sm font-mono text-gray-800 dark:text-gray-200";

// Fenced code
pub const PRE: &str = "bg-gray-100 dark:bg-gray-800 p-4 rounded-lg overflow-x-auto my-4 border border-gray-200 dark:border-gray-700";
pub const BLOCK_CODE: &str = "text-sm font-mono text-gray-800 dark:text-gray-200";

// Tables
pub const TABLE_WRAPPER: &str = "overflow-x-auto my-4";
pub const TABLE: &str = "border-collapse border border-gray-300 dark:border-gray-600 w-full text-sm";
pub const HEADER_ROW: &str = "bg-gray-50 dark:bg-gray-700";
pub const BODY_ROW: &str = "hover:bg-gray-50 dark:hover:bg-gray-700";
pub const HEADER_CELL: &str = "border border-gray-300 dark:border-gray-600 px-3 py-2 font-semibold text-left text-sm";
pub const BODY_CELL: &str = "border border-gray-300 dark:border-gray-600 px-3 py-2 text-sm";

// Lists
pub const TASK_ITEM: &str = "list-none flex items-start my-1";
pub const TASK_CHECKBOX: &str = "mr-2 mt-1";
pub const BULLET_ITEM: &str = "ml-4 my-1 list-disc";
pub const NUMBERED_ITEM: &str = "ml-4 my-1 list-decimal";
pub const TERM: &str = "font-semibold text-gray-900 dark:text-gray-100 mt-2";
pub const DEFINITION: &str = "ml-4 mb-2 text-gray-700 dark:text-gray-300";

// Blocks
pub const BLOCKQUOTE: &str = "border-l-4 border-blue-500 dark:border-blue-400 pl-4 my-4 italic text-gray-700 dark:text-gray-300 bg-gray-50 dark:bg-gray-800 py-2 rounded-r";
pub const RULE: &str = "my-8 border-0 border-t-2 border-gray-300 dark:border-gray-600";

// Links and media
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:underline hover:text-blue-800 dark:hover:text-blue-300 transition-colors";
pub const IMAGE: &str = "max-w-full h-auto rounded-lg my-4 shadow-sm border border-gray-200 dark:border-gray-700";

/// Paragraph wrapper, also used for the outer container.
pub const PARAGRAPH: &str = "my-4 leading-relaxed";
