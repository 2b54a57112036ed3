//! Pre-flight checks run before any request is issued

use thiserror::Error;

use crate::config::MentorMode;
use crate::form::Profile;

/// Why a submission was refused before it started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields before getting suggestions.")]
    MissingInformation,

    #[error("Please enter your OpenAI API key to get suggestions.")]
    ApiKeyRequired,
}

impl ValidationError {
    /// Notification title for this error
    pub fn title(self) -> &'static str {
        match self {
            ValidationError::MissingInformation => "Missing Information",
            ValidationError::ApiKeyRequired => "API Key Required",
        }
    }
}

/// Check that a submission may proceed
///
/// Emptiness is checked on the raw strings: a field holding only spaces
/// counts as filled. Missing profile fields are reported before a missing
/// API key.
pub fn validate_submission(
    profile: &Profile,
    api_key: &str,
    mode: MentorMode,
) -> Result<(), ValidationError> {
    if profile.name.is_empty() || profile.interests.is_empty() || profile.skills.is_empty() {
        return Err(ValidationError::MissingInformation);
    }

    if mode.requires_api_key() && api_key.is_empty() {
        return Err(ValidationError::ApiKeyRequired);
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
