//! OpenAI chat-completion client
//!
//! Sends one non-streaming chat request and returns the first choice's text.
//! Works with any OpenAI-compatible endpoint through `base_url`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::RequestError;
use crate::config::OpenAiConfig;

/// Default OpenAI API base URL
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat-completion client
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
    temperature: f64,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key is never printed
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &OpenAiConfig) -> Result<Self, RequestError> {
        let endpoint = build_endpoint(config.base_url.as_deref());

        // Local servers (Ollama, LM Studio) are reached directly, never through a proxy
        let mut builder = reqwest::Client::builder();
        if is_loopback_endpoint(&endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| RequestError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            endpoint,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize the request body for `prompt`
    pub fn build_request_body(&self, prompt: &str) -> Result<String, RequestError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        serde_json::to_string(&request).map_err(|e| RequestError::Parse(e.to_string()))
    }

    /// Send `prompt` and return the first completion's text
    pub async fn complete(&self, prompt: &str) -> Result<String, RequestError> {
        let body = self.build_request_body(prompt)?;

        log::debug!("POST {} (model {})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RequestError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        parse_completion(&text)
    }
}

/// Append `/chat/completions` to a base URL unless it is already there
fn build_endpoint(base_url: Option<&str>) -> String {
    let base = base_url.unwrap_or(OPENAI_BASE_URL).trim_end_matches('/');
    if base.ends_with(CHAT_COMPLETIONS_PATH) {
        base.to_string()
    } else {
        format!("{}{}", base, CHAT_COMPLETIONS_PATH)
    }
}

fn is_loopback_endpoint(endpoint: &str) -> bool {
    let without_scheme = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    let authority = without_scheme.split('/').next().unwrap_or_default();
    let host = authority
        .rsplit_once(':')
        .map_or(authority, |(host, _)| host);
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}

/// Extract the first choice's message content from a response body
pub fn parse_completion(body: &str) -> Result<String, RequestError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| RequestError::Parse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RequestError::Parse("response has no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| RequestError::Parse("first choice has no content".to_string()))
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
