use markdraft::document::{SAMPLE, generate_toc};
use markdraft::editor::{duplicate_line, insert_around, move_line_up};
use markdraft::render::render;

#[test]
fn test_rendered_heading_ids_match_outline() {
    let toc = generate_toc(SAMPLE);
    let html = render(SAMPLE);
    for entry in &toc {
        let tag = format!(r#"<h{} id="{}""#, entry.level, entry.id);
        assert!(html.contains(&tag), "missing {tag}");
    }
}

#[test]
fn test_table_rows_and_cells() {
    let html = render("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
    assert_eq!(html.matches("<tr ").count(), 3);
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 4);
}

#[test]
fn test_edit_helpers_compose() {
    let (text, cursor) = insert_around("hello world", 0, 5, "**", "**", "text");
    assert_eq!((text.as_str(), cursor), ("**hello** world", 9));
    assert_eq!(duplicate_line("abc\ndef", 1), "abc\nabc\ndef");
    assert_eq!(move_line_up("a\nb\nc", 2), "b\na\nc");
    assert_eq!(move_line_up("a\nb\nc", 0), "a\nb\nc");
}
