//! Derived views of a markdown document.
//!
//! This module handles:
//! - Extracting the heading outline for the TOC sidebar
//! - Counting words, characters and reading time
//!
//! Both are recomputed from the full source on every change.

mod stats;
mod toc;

pub use stats::{Stats, WORDS_PER_MINUTE, compute_stats};
pub use toc::{TocEntry, generate_toc};

/// Welcome document shown when the store holds no saved content.
pub const SAMPLE: &str = "# Welcome to Markdraft

This is a **professional** markdown editor with powerful features and advanced capabilities.

## Features

- Advanced toolbar with more formatting options
- Keyboard shortcuts for all commands
- File management with multiple documents
- Find and replace functionality
- Word count and reading time statistics
- Multiple export formats
- Table of contents generation

### Heading Levels Demo

#### H4 Heading
This is a level 4 heading with proper styling.

##### H5 Heading
This is a level 5 heading with proper styling.

###### H6 Heading
This is a level 6 heading with proper styling.

## Code Examples

```rust
fn hello() {
    println!(\"Hello, World!\");
}
```

## Tables

| Feature | Status | Priority |
|---------|--------|----------|
| Bold | Done | High |
| Italic | Done | High |
| Tables | Done | Medium |

> This is a blockquote with **bold** and *italic* text.

## Lists

### Unordered List
- Item 1
- Item 2
  - Nested item
  - Another nested item

### Ordered List
1. First item
2. Second item
3. Third item

### Definition List
Term 1
: Definition 1

Term 2
: Definition 2

## Links and Images

[Visit our website](https://example.com)

![Sample Image](https://via.placeholder.com/300x200)

---

*Happy writing!*";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_outline_starts_with_welcome() {
        let toc = generate_toc(SAMPLE);
        assert_eq!(toc[0].level, 1);
        assert_eq!(toc[0].title, "Welcome to Markdraft");
        assert!(toc.iter().any(|e| e.level == 6 && e.title == "H6 Heading"));
    }

    #[test]
    fn test_sample_renders_every_construct() {
        let html = crate::render::render(SAMPLE);
        for needle in [
            "<h1 ", "<h6 ", "<strong ", "<em ", "<pre ", "<table ", "list-disc", "list-decimal",
            "<dt ", "<blockquote ", "<a href=", "<img ", "<hr ",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_sample_stats_are_nonzero() {
        let stats = compute_stats(SAMPLE);
        assert!(stats.word_count > 100);
        assert_eq!(stats.reading_time_minutes, 2);
    }
}
