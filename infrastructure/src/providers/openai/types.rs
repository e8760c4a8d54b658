//! Wire types for the chat completions endpoint

use roundtable_application::ports::response_provider::ProviderError;
use serde::{Deserialize, Serialize};

const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A system + user request with the fixed penalties
    pub fn new(
        model: &'a str,
        system: &'a str,
        user: &'a str,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Extract the first choice's text from a response body.
///
/// Anything other than a non-blank first choice is `Rejected`.
pub(super) fn parse_reply(body: &str) -> Result<String, ProviderError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Rejected(format!("malformed response: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Rejected("response has no choices".to_string()))?;

    let text = choice
        .message
        .and_then(|m| m.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(ProviderError::Rejected("response text is empty".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest::new("gpt-3.5-turbo", "sys", "user", 100, 0.9);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "user");
        assert_eq!(value["max_tokens"], 100);
        assert!((value["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert!((value["presence_penalty"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert!((value["frequency_penalty"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_parse_first_choice_trimmed() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  お弁当はおにぎりよ \n"}},{"message":{"content":"second"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "お弁当はおにぎりよ");
    }

    #[test]
    fn test_no_choices_is_rejected() {
        assert!(matches!(
            parse_reply(r#"{"choices":[]}"#),
            Err(ProviderError::Rejected(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"id":"x"}"#),
            Err(ProviderError::Rejected(_))
        ));
    }

    #[test]
    fn test_empty_or_missing_content_is_rejected() {
        assert!(parse_reply(r#"{"choices":[{"message":{"content":"   "}}]}"#).is_err());
        assert!(parse_reply(r#"{"choices":[{"message":{"content":null}}]}"#).is_err());
        assert!(parse_reply(r#"{"choices":[{}]}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_reply("<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), "rejected");
    }
}
