//! Tests for form field key handling

use super::*;
use crate::test_utils::test_helpers::key;

fn type_text(form: &mut FormState, field: FormField, text: &str) {
    for ch in text.chars() {
        handle_field_key(form, field, key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_typing_edits_the_field() {
    let mut form = FormState::new();
    type_text(&mut form, FormField::Name, "Ana");

    assert_eq!(form.value(FormField::Name), "Ana");
    assert_eq!(form.value(FormField::Interests), "");
}

#[test]
fn test_backspace_removes_characters() {
    let mut form = FormState::new();
    type_text(&mut form, FormField::Name, "Anna");
    let result = handle_field_key(&mut form, FormField::Name, key(KeyCode::Backspace));

    assert_eq!(result, FieldKeyResult::Edited);
    assert_eq!(form.value(FormField::Name), "Ann");
}

#[test]
fn test_enter_moves_on_from_single_line_field() {
    let mut form = FormState::new();
    type_text(&mut form, FormField::Name, "Ana");
    let result = handle_field_key(&mut form, FormField::Name, key(KeyCode::Enter));

    assert_eq!(result, FieldKeyResult::FocusNext);
    assert_eq!(form.value(FormField::Name), "Ana");
}

#[test]
fn test_enter_inserts_newline_in_multiline_field() {
    let mut form = FormState::new();
    type_text(&mut form, FormField::Skills, "Python");
    let result = handle_field_key(&mut form, FormField::Skills, key(KeyCode::Enter));
    type_text(&mut form, FormField::Skills, "writing");

    assert_eq!(result, FieldKeyResult::Edited);
    assert_eq!(form.value(FormField::Skills), "Python\nwriting");
}

#[test]
fn test_up_down_navigate_from_single_line_field() {
    let mut form = FormState::new();
    assert_eq!(
        handle_field_key(&mut form, FormField::Name, key(KeyCode::Down)),
        FieldKeyResult::FocusNext
    );
    assert_eq!(
        handle_field_key(&mut form, FormField::Name, key(KeyCode::Up)),
        FieldKeyResult::FocusPrev
    );
}

#[test]
fn test_up_moves_cursor_inside_multiline_text() {
    let mut form = FormState::new();
    form.set_value(FormField::Interests, "art\nmusic");

    let result = handle_field_key(&mut form, FormField::Interests, key(KeyCode::Up));
    assert_eq!(result, FieldKeyResult::Edited);
    assert_eq!(form.textarea(FormField::Interests).cursor().0, 0);

    let result = handle_field_key(&mut form, FormField::Interests, key(KeyCode::Up));
    assert_eq!(result, FieldKeyResult::FocusPrev);
}
