//! Pipe-table reconstruction.

use std::fmt::Write as _;

use super::style;

/// Split one table row into trimmed cells.
///
/// The empty cells produced by the outer pipes are dropped; interior empty
/// cells are kept so columns stay aligned.
pub fn split_cells(row: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = row.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

/// Build the table markup for a matched block.
///
/// `header` is the text between the outer pipes of the header row; `body`
/// holds the remaining rows, one per line. Blank body lines are skipped and
/// zero body rows is a valid header-only table.
pub fn build(header: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{}"><table class="{}"><tr class="{}">"#,
        style::TABLE_WRAPPER,
        style::TABLE,
        style::HEADER_ROW
    );
    for cell in split_cells(header) {
        let _ = write!(html, r#"<th class="{}">{cell}</th>"#, style::HEADER_CELL);
    }
    html.push_str("</tr>");

    for row in body.trim().split('\n').filter(|line| !line.trim().is_empty()) {
        let _ = write!(html, r#"<tr class="{}">"#, style::BODY_ROW);
        for cell in split_cells(row) {
            let _ = write!(html, r#"<td class="{}">{cell}</td>"#, style::BODY_CELL);
        }
        html.push_str("</tr>");
    }

    html.push_str("</table></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cells_drops_outer_empties() {
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_cells_keeps_interior_empty_cell() {
        assert_eq!(split_cells("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_cells_without_outer_pipes() {
        assert_eq!(split_cells("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_build_header_only() {
        let html = build(" A | B ", "");
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<tr ").count(), 1);
        assert!(!html.contains("<td "));
    }

    #[test]
    fn test_build_skips_blank_body_lines() {
        let html = build(" A ", "| 1 |\n\n| 2 |\n");
        assert_eq!(html.matches("<td ").count(), 2);
        assert!(html.contains(">1</td>"));
        assert!(html.contains(">2</td>"));
    }
}
