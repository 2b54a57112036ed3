use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

/// Character drawn in place of each API key character
pub const API_KEY_MASK: char = '•';

/// One editable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Interests,
    Skills,
    ApiKey,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Interests,
        FormField::Skills,
        FormField::ApiKey,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Interests => "Your Interests",
            FormField::Skills => "Your Skills",
            FormField::ApiKey => "OpenAI API Key",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter your name",
            FormField::Interests => {
                "e.g., design, teaching, technology, helping others, solving problems..."
            }
            FormField::Skills => {
                "e.g., Python, writing, communication, project management, creative thinking..."
            }
            FormField::ApiKey => "sk-...",
        }
    }

    /// Interests and skills accept newlines; Enter moves on from the others
    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Interests | FormField::Skills)
    }

    /// Rows needed to draw the field, borders included
    pub fn height(self) -> u16 {
        if self.is_multiline() { 5 } else { 3 }
    }
}

/// What gets sent for suggestions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub interests: String,
    pub skills: String,
}

/// Current value of every form field
///
/// Each field is backed by its own textarea so editing one never touches
/// the others.
pub struct FormState {
    name: TextArea<'static>,
    interests: TextArea<'static>,
    skills: TextArea<'static>,
    api_key: TextArea<'static>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: new_field_textarea(FormField::Name, ""),
            interests: new_field_textarea(FormField::Interests, ""),
            skills: new_field_textarea(FormField::Skills, ""),
            api_key: new_field_textarea(FormField::ApiKey, ""),
        }
    }

    pub fn textarea(&self, field: FormField) -> &TextArea<'static> {
        match field {
            FormField::Name => &self.name,
            FormField::Interests => &self.interests,
            FormField::Skills => &self.skills,
            FormField::ApiKey => &self.api_key,
        }
    }

    pub fn textarea_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Interests => &mut self.interests,
            FormField::Skills => &mut self.skills,
            FormField::ApiKey => &mut self.api_key,
        }
    }

    /// Current raw value of a field, lines joined with `\n`
    pub fn value(&self, field: FormField) -> String {
        self.textarea(field).lines().join("\n")
    }

    /// Replace a single field's value, leaving every other field untouched
    pub fn set_value(&mut self, field: FormField, value: &str) {
        *self.textarea_mut(field) = new_field_textarea(field, value);
    }

    pub fn profile(&self) -> Profile {
        Profile {
            name: self.value(FormField::Name),
            interests: self.value(FormField::Interests),
            skills: self.value(FormField::Skills),
        }
    }

    pub fn api_key(&self) -> String {
        self.value(FormField::ApiKey)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_field_textarea(field: FormField, value: &str) -> TextArea<'static> {
    let lines: Vec<String> = if field.is_multiline() {
        value.split('\n').map(str::to_string).collect()
    } else {
        vec![value.replace('\n', " ")]
    };

    let mut textarea = TextArea::new(lines);
    textarea.move_cursor(tui_textarea::CursorMove::Bottom);
    textarea.move_cursor(tui_textarea::CursorMove::End);

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(field.placeholder());
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

    if field == FormField::ApiKey {
        textarea.set_mask_char(API_KEY_MASK);
    }

    textarea
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
