use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::{NotificationState, Severity};
use crate::widgets::popup;

const MAX_TOAST_WIDTH: u16 = 48;

/// Render the current notification as a toast in the top-right corner
pub fn render_notification(frame: &mut Frame, notification: &NotificationState) {
    let Some(current) = notification.current() else {
        return;
    };

    let frame_area = frame.area();

    // Borders plus one column of padding on each side
    let content_width = current.title.width().max(current.description.width()) as u16;
    let width = (content_width + 4).min(MAX_TOAST_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let description_lines = (current.description.width() as u16).div_ceil(inner_width).max(1);
    let height = description_lines + 3;

    let area = popup::top_right_popup(frame_area, width, height, 1);
    if area.width < 5 || area.height < 3 {
        return;
    }

    let (accent, icon) = match current.severity {
        Severity::Default => (Color::Green, "✓"),
        Severity::Destructive => (Color::Red, "✗"),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(accent)),
            Span::styled(
                current.title.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            current.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));

    popup::clear_area(frame, area);
    let toast = Paragraph::new(lines)
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
        .wrap(Wrap { trim: true });
    frame.render_widget(toast, area);
}
