use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::config::MentorMode;
use crate::form::form_render::render_field;
use crate::notification::render_notification;
use crate::results::render_results;
use crate::widgets::popup;

/// Braille spinner frames for the busy trigger
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Ticks each spinner frame stays on screen
const SPINNER_FRAME_TICKS: u64 = 2;

const MAX_CONTENT_WIDTH: u16 = 100;

pub const SUBMIT_LABEL: &str = "Get Career Suggestions";
pub const BUSY_LABEL: &str = "Getting Your Career Suggestions...";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = popup::centered_column(frame.area(), MAX_CONTENT_WIDTH);

        let fields = self.visible_fields();
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(fields.iter().map(|field| Constraint::Length(field.height())));
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::vertical(constraints).split(area);

        self.render_header(frame, chunks[0]);

        for (i, field) in fields.iter().enumerate() {
            let focused = self.focus == Focus::Field(*field);
            render_field(&mut self.form, *field, focused, frame, chunks[i + 1]);
        }

        self.render_submit_button(frame, chunks[fields.len() + 1]);

        let results_area = chunks[fields.len() + 2];
        if let Some(text) = self.mentor.result() {
            let focused = self.focus == Focus::Results;
            render_results(text, &mut self.results_scroll, focused, frame, results_area);
        } else {
            render_footer_hint(frame, results_area);
        }

        // Toasts draw over everything else
        render_notification(frame, &self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mode_tag = match self.mode() {
            MentorMode::Mock => Span::styled(" [mock] ", Style::default().fg(Color::Yellow)),
            MentorMode::Live => Span::styled(" [live] ", Style::default().fg(Color::Green)),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("✦ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    "AI Career Mentor",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                mode_tag,
            ]),
            Line::from(Span::styled(
                "Discover career paths that match your interests and skills.",
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_submit_button(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::SubmitButton;
        let loading = self.mentor.is_loading();

        let label = if loading {
            let frame_index =
                (self.frame_count / SPINNER_FRAME_TICKS) as usize % SPINNER_FRAMES.len();
            Line::from(vec![
                Span::styled(
                    format!("{} ", SPINNER_FRAMES[frame_index]),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(BUSY_LABEL, Style::default().fg(Color::Gray)),
            ])
        } else {
            let style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(format!(" ✦ {} ", SUBMIT_LABEL), style))
        };

        // Disabled look while a request is in flight
        let border_color = match (loading, focused) {
            (true, _) => Color::DarkGray,
            (false, true) => Color::Cyan,
            (false, false) => Color::Magenta,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

fn render_footer_hint(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let hint = Line::from(Span::styled(
        "Tab/Shift+Tab move | Enter on button or Ctrl+S to submit | Esc to quit",
        Style::default().fg(Color::DarkGray),
    ));
    let hint_area = Rect {
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
}
