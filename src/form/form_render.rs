//! Form field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::{FormField, FormState};

/// Render one form field, highlighted when it has focus
pub fn render_field(
    form: &mut FormState,
    field: FormField,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", field.label()),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )];
    if focused && field.is_multiline() {
        title_spans.push(Span::styled(
            "(Enter for new line) ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let textarea = form.textarea_mut(field);
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );

    // Only the focused field shows a cursor
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor_style);

    frame.render_widget(&*textarea, area);
}
