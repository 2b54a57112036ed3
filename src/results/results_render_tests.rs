//! Tests for result text rendering

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_result_lines_preserve_line_breaks() {
    let lines = result_lines("first\n\n  indented\nlast");

    let texts: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(texts, vec!["first", "", "  indented", "last"]);
}

#[test]
fn test_heading_lines_keep_markers_and_are_bold() {
    let text = "**1. UX/UI Designer**\nplain";
    let lines = result_lines(text);

    let rendered: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(rendered.join("\n"), text);
    assert!(
        lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD)
    );
    assert!(
        !lines[1].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD)
    );
}

#[test]
fn test_mock_template_is_drawn_verbatim() {
    let text = crate::mentor::mock::mock_suggestions("Ana");
    let rendered: Vec<String> = result_lines(&text).iter().map(line_text).collect();

    assert_eq!(rendered.join("\n"), text);
}

#[test]
fn test_lone_asterisks_are_kept_verbatim() {
    let lines = result_lines("****\n**unclosed");

    assert_eq!(line_text(&lines[0]), "****");
    assert_eq!(line_text(&lines[1]), "**unclosed");
}

#[test]
fn test_render_results_draws_text_and_title() {
    let backend = TestBackend::new(60, 10);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut scroll = ScrollState::new();

    terminal
        .draw(|f| {
            let area = f.area();
            render_results("Line one\nLine two", &mut scroll, false, f, area);
        })
        .unwrap();

    let output = terminal.backend().to_string();
    assert!(output.contains("Career Suggestions"));
    assert!(output.contains("Line one"));
    assert!(output.contains("Line two"));
}

#[test]
fn test_render_results_updates_scroll_bounds() {
    let backend = TestBackend::new(40, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut scroll = ScrollState::new();
    let text = (1..=20)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    terminal
        .draw(|f| {
            let area = f.area();
            render_results(&text, &mut scroll, true, f, area);
        })
        .unwrap();

    assert_eq!(scroll.viewport_height, 4);
    assert_eq!(scroll.max_offset, 16);
}
