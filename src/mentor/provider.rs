//! Suggestion provider abstraction
//!
//! Defines the SuggestionProvider enum, RequestError types, and the factory
//! that picks the provider for the configured mode.

use std::time::Duration;

use thiserror::Error;

use super::mock::MockProvider;
use crate::config::{MentorConfig, MentorMode};
use crate::form::Profile;

mod openai;

pub use openai::OpenAiClient;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Transport failure: DNS, connection, TLS, interrupted body
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Suggestion provider implementations
#[derive(Debug)]
pub enum SuggestionProvider {
    Mock(MockProvider),
    OpenAi(OpenAiClient),
}

impl SuggestionProvider {
    /// Create the provider for the configured mode
    ///
    /// `api_key` is only used in live mode.
    pub fn from_config(config: &MentorConfig, api_key: &str) -> Result<Self, RequestError> {
        match config.mode {
            MentorMode::Mock => Ok(SuggestionProvider::Mock(MockProvider::new(
                Duration::from_millis(config.mock_delay_ms),
            ))),
            MentorMode::Live => Ok(SuggestionProvider::OpenAi(OpenAiClient::new(
                api_key.to_string(),
                &config.openai,
            )?)),
        }
    }

    /// Fetch suggestions for a profile; exactly one attempt
    pub async fn suggest(&self, profile: &Profile) -> Result<String, RequestError> {
        match self {
            SuggestionProvider::Mock(mock) => Ok(mock.suggest(profile).await),
            SuggestionProvider::OpenAi(client) => {
                let prompt = super::prompt::build_prompt(profile);
                client.complete(&prompt).await
            }
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
