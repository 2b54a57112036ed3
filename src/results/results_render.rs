use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::scroll::ScrollState;

/// Convert suggestion text into display lines, one per source line
///
/// Every line is shown verbatim. A line wrapped in `**` is additionally
/// styled bold; its asterisks stay in the text.
pub fn result_lines(text: &str) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| {
            let style = if is_heading(line) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(line.to_string(), style))
        })
        .collect()
}

fn is_heading(line: &str) -> bool {
    line.len() > 4 && line.starts_with("**") && line.ends_with("**")
}

/// Render the "Career Suggestions" panel
pub fn render_results(
    text: &str,
    scroll: &mut ScrollState,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let lines = result_lines(text);

    let viewport_height = area.height.saturating_sub(2);
    scroll.update_bounds(lines.len() as u32, viewport_height);

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let hint = if focused {
        " j/k to scroll | Shift+Tab back to form "
    } else {
        " Tab to focus "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::raw(" 📖 "),
            Span::styled(
                "Career Suggestions",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]))
        .title_bottom(
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
        )
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll.offset, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
