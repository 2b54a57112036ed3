use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};
use crate::form::form_events::{FieldKeyResult, handle_field_key};

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Field(field) => match handle_field_key(&mut self.form, field, key) {
                FieldKeyResult::Edited => {}
                FieldKeyResult::FocusNext => self.focus_next(),
                FieldKeyResult::FocusPrev => self.focus_prev(),
            },
            Focus::SubmitButton => self.handle_submit_button_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.quit();
                true
            }
            KeyCode::Char('c') if ctrl => {
                self.quit();
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                true
            }
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            _ => false,
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit();
            }
            KeyCode::Up => self.focus_prev(),
            KeyCode::Down => self.focus_next(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.results_scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.results_scroll.scroll_up(1),
            KeyCode::Char('J') => self.results_scroll.scroll_down(10),
            KeyCode::Char('K') => self.results_scroll.scroll_up(10),
            KeyCode::PageDown => self.results_scroll.page_down(),
            KeyCode::PageUp => self.results_scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.results_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.results_scroll.jump_to_bottom(),
            _ => {}
        }
    }
}
