// Configuration type definitions

use serde::Deserialize;

/// Model used for live requests when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Token ceiling sent with every live request
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Fixed delay before the mock response is produced
pub const DEFAULT_MOCK_DELAY_MS: u64 = 2000;

/// How long a toast stays on screen
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;

/// Where suggestions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MentorMode {
    /// Fixed response after a delay, no network and no API key
    #[default]
    Mock,
    /// Chat-completion request authorized by a user-supplied API key
    Live,
}

impl MentorMode {
    /// Whether the form must collect an API key before submitting
    pub fn requires_api_key(self) -> bool {
        matches!(self, MentorMode::Live)
    }

    pub fn label(self) -> &'static str {
        match self {
            MentorMode::Mock => "mock",
            MentorMode::Live => "live",
        }
    }
}

/// OpenAI-compatible endpoint settings (`[mentor.openai]`)
///
/// The API key is deliberately absent: it is typed into the form and only
/// ever lives in memory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub model: String,
    /// Base URL such as `https://api.openai.com/v1`; `/chat/completions` is appended
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Suggestion source settings (`[mentor]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MentorConfig {
    pub mode: MentorMode,
    pub mock_delay_ms: u64,
    pub openai: OpenAiConfig,
}

impl Default for MentorConfig {
    fn default() -> Self {
        MentorConfig {
            mode: MentorMode::default(),
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
            openai: OpenAiConfig::default(),
        }
    }
}

/// Toast settings (`[notification]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub mentor: MentorConfig,
    pub notification: NotificationConfig,
}
