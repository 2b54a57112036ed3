//! Tests for provider selection and error display

use super::*;
use crate::config::OpenAiConfig;

fn mentor_config(mode: MentorMode) -> MentorConfig {
    MentorConfig {
        mode,
        mock_delay_ms: 0,
        openai: OpenAiConfig::default(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Ana".to_string(),
        interests: "art".to_string(),
        skills: "writing".to_string(),
    }
}

#[test]
fn test_request_error_display() {
    assert_eq!(
        RequestError::Network("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        RequestError::Api {
            code: 429,
            message: "rate limited".to_string()
        }
        .to_string(),
        "API error (429): rate limited"
    );
    assert_eq!(
        RequestError::Parse("invalid json".to_string()).to_string(),
        "Parse error: invalid json"
    );
}

#[test]
fn test_mock_mode_builds_mock_provider() {
    let provider = SuggestionProvider::from_config(&mentor_config(MentorMode::Mock), "").unwrap();
    assert!(matches!(provider, SuggestionProvider::Mock(_)));
}

#[test]
fn test_live_mode_builds_openai_provider() {
    let provider =
        SuggestionProvider::from_config(&mentor_config(MentorMode::Live), "sk-test").unwrap();
    assert!(matches!(provider, SuggestionProvider::OpenAi(_)));
}

#[tokio::test]
async fn test_mock_provider_suggests_template() {
    let provider = SuggestionProvider::from_config(&mentor_config(MentorMode::Mock), "").unwrap();
    let text = provider.suggest(&profile()).await.unwrap();

    assert_eq!(text, crate::mentor::mock::mock_suggestions("Ana"));
}

#[tokio::test]
async fn test_live_provider_sends_prompt() {
    use crate::test_utils::test_helpers::serve_once;

    let server = serve_once(
        200,
        r#"{"choices": [{"message": {"role": "assistant", "content": "three careers"}}]}"#,
    );
    let mut config = mentor_config(MentorMode::Live);
    config.openai.base_url = Some(server.base_url.clone());

    let provider = SuggestionProvider::from_config(&config, "sk-live").unwrap();
    let text = provider.suggest(&profile()).await.unwrap();
    assert_eq!(text, "three careers");

    let request = server.received_request();
    assert!(request.contains("my name is ana."));
    assert!(request.contains("authorization: bearer sk-live"));
}
