//! Key handling for a focused form field

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{FormField, FormState};

/// What the caller should do after a key reached a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKeyResult {
    /// The field consumed the key
    Edited,
    FocusNext,
    FocusPrev,
}

/// Handle a key for the focused field
///
/// Enter inserts a newline in multi-line fields and moves on from single-line
/// ones. Up/Down only navigate between fields when the field has a single
/// line, otherwise they move the cursor inside the text.
pub fn handle_field_key(form: &mut FormState, field: FormField, key: KeyEvent) -> FieldKeyResult {
    let textarea = form.textarea_mut(field);
    let (row, _) = textarea.cursor();
    let last_row = textarea.lines().len().saturating_sub(1);

    match key.code {
        KeyCode::Enter if !field.is_multiline() => FieldKeyResult::FocusNext,
        KeyCode::Down if row >= last_row => FieldKeyResult::FocusNext,
        KeyCode::Up if row == 0 => FieldKeyResult::FocusPrev,
        _ => {
            textarea.input(key);
            FieldKeyResult::Edited
        }
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
