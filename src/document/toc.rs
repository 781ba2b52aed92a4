//! Table-of-contents extraction.

use serde::{Deserialize, Serialize};

/// One heading in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Heading text without the `#` markers
    pub title: String,
    /// Anchor id, `heading-<index>` in document order
    pub id: String,
}

/// Extract the heading outline of a markdown source.
///
/// A heading is a line starting with one to six `#`, then at least one space
/// or tab, then text. Ids come from the heading's position, never its text,
/// so duplicate titles stay distinct.
pub fn generate_toc(text: &str) -> Vec<TocEntry> {
    text.split('\n')
        .filter_map(parse_heading)
        .enumerate()
        .map(|(index, (level, title))| TocEntry {
            level,
            title: title.to_string(),
            id: format!("heading-{index}"),
        })
        .collect()
}

/// Split a line into `(level, title)` if it is a heading line.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let title = rest.trim_start_matches([' ', '\t']);
    if title.is_empty() {
        return None;
    }
    u8::try_from(hashes).ok().map(|level| (level, title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: u8, title: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        assert_eq!(
            generate_toc("# A\n## B\n## A"),
            vec![
                entry(1, "A", "heading-0"),
                entry(2, "B", "heading-1"),
                entry(2, "A", "heading-2"),
            ]
        );
    }

    #[test]
    fn test_empty_source_has_no_entries() {
        assert!(generate_toc("").is_empty());
    }

    #[test]
    fn test_all_six_levels() {
        let src = (1..=6)
            .map(|n| format!("{} H{n}", "#".repeat(n)))
            .collect::<Vec<_>>()
            .join("\n");
        let levels: Vec<u8> = generate_toc(&src).iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        assert!(generate_toc("####### too deep").is_empty());
    }

    #[test]
    fn test_marker_without_space_is_not_a_heading() {
        assert!(generate_toc("#hashtag\n#").is_empty());
    }

    #[test]
    fn test_marker_with_only_spaces_is_not_a_heading() {
        assert!(generate_toc("##   ").is_empty());
    }

    #[test]
    fn test_extra_separator_whitespace_is_stripped() {
        assert_eq!(generate_toc("##  \tSpaced"), vec![entry(2, "Spaced", "heading-0")]);
    }

    #[test]
    fn test_indented_marker_is_not_a_heading() {
        assert!(generate_toc("  # indented").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(generate_toc("# A\r\nbody\r\n"), vec![entry(1, "A", "heading-0")]);
    }

    #[test]
    fn test_body_lines_are_skipped_without_consuming_ids() {
        let toc = generate_toc("intro\n# One\ntext\n# Two");
        assert_eq!(toc[1], entry(1, "Two", "heading-1"));
    }
}
