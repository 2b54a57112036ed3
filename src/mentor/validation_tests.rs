//! Tests for submission validation

use super::*;
use proptest::prelude::*;

fn profile(name: &str, interests: &str, skills: &str) -> Profile {
    Profile {
        name: name.to_string(),
        interests: interests.to_string(),
        skills: skills.to_string(),
    }
}

#[test]
fn test_complete_profile_passes_in_mock_mode() {
    let result = validate_submission(&profile("Ana", "art", "writing"), "", MentorMode::Mock);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_empty_skills_is_missing_information_in_both_modes() {
    let p = profile("Ana", "art", "");
    for mode in [MentorMode::Mock, MentorMode::Live] {
        assert_eq!(
            validate_submission(&p, "sk-test", mode),
            Err(ValidationError::MissingInformation)
        );
    }
}

#[test]
fn test_whitespace_only_field_counts_as_filled() {
    let result = validate_submission(&profile(" ", "art", "writing"), "", MentorMode::Mock);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_live_mode_requires_api_key() {
    let result = validate_submission(&profile("Ana", "art", "writing"), "", MentorMode::Live);
    assert_eq!(result, Err(ValidationError::ApiKeyRequired));
}

#[test]
fn test_live_mode_with_api_key_passes() {
    let result =
        validate_submission(&profile("Ana", "art", "writing"), "sk-test", MentorMode::Live);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_missing_information_reported_before_api_key() {
    let result = validate_submission(&profile("", "art", "writing"), "", MentorMode::Live);
    assert_eq!(result, Err(ValidationError::MissingInformation));
}

#[test]
fn test_titles_and_descriptions() {
    assert_eq!(ValidationError::MissingInformation.title(), "Missing Information");
    assert_eq!(
        ValidationError::MissingInformation.to_string(),
        "Please fill in all fields before getting suggestions."
    );
    assert_eq!(ValidationError::ApiKeyRequired.title(), "API Key Required");
}

// Any profile with at least one empty required field is refused, whatever the
// mode or API key.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_any_empty_field_is_missing_information(
        name in "[a-zA-Z ]{0,10}",
        interests in "[a-zA-Z ]{0,10}",
        skills in "[a-zA-Z ]{0,10}",
        api_key in "[a-zA-Z0-9-]{0,20}",
        live in prop::bool::ANY,
    ) {
        let mode = if live { MentorMode::Live } else { MentorMode::Mock };
        let p = profile(&name, &interests, &skills);
        let result = validate_submission(&p, &api_key, mode);

        let any_empty = name.is_empty() || interests.is_empty() || skills.is_empty();
        if any_empty {
            prop_assert_eq!(result, Err(ValidationError::MissingInformation));
        } else if live && api_key.is_empty() {
            prop_assert_eq!(result, Err(ValidationError::ApiKeyRequired));
        } else {
            prop_assert_eq!(result, Ok(()));
        }
    }
}
