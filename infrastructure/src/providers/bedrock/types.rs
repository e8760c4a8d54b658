//! Conversions between Bedrock Converse API types and provider results

use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;
use roundtable_application::ports::response_provider::ProviderError;

/// Build the single user message of a turn or summary request.
pub fn user_message(prompt: &str) -> Result<bedrock::Message, ProviderError> {
    bedrock::Message::builder()
        .role(bedrock::ConversationRole::User)
        .content(bedrock::ContentBlock::Text(prompt.to_string()))
        .build()
        .map_err(|e| ProviderError::Unavailable(format!("failed to build message: {}", e)))
}

/// Join the text blocks of a Converse output.
///
/// A missing output, a non-message output, or blank text is `Rejected`.
pub fn extract_text(output: Option<&bedrock::ConverseOutput>) -> Result<String, ProviderError> {
    let message = match output {
        Some(bedrock::ConverseOutput::Message(message)) => message,
        Some(_) => {
            return Err(ProviderError::Rejected(
                "unsupported Bedrock output type".to_string(),
            ));
        }
        None => {
            return Err(ProviderError::Rejected(
                "no output in Bedrock response".to_string(),
            ));
        }
    };

    let text: String = message
        .content()
        .iter()
        .filter_map(|block| match block {
            bedrock::ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    let text = text.trim();
    if text.is_empty() {
        return Err(ProviderError::Rejected(
            "Bedrock response has no text".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// Map a Converse API error to `ProviderError`.
///
/// Every SDK or service failure means no usable reply came back.
pub fn convert_converse_error(err: &SdkError<ConverseError>) -> ProviderError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                ProviderError::Unavailable(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                ProviderError::Unavailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ValidationException(e) => {
                ProviderError::Unavailable(format!("Bedrock validation error: {}", e))
            }
            ConverseError::AccessDeniedException(e) => {
                ProviderError::Unavailable(format!("Bedrock access denied: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => {
                ProviderError::Unavailable("Bedrock model timed out".to_string())
            }
            other => ProviderError::Unavailable(format!("Bedrock error: {:?}", other)),
        },
        other => ProviderError::Unavailable(format!("Bedrock SDK error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(blocks: Vec<bedrock::ContentBlock>) -> bedrock::ConverseOutput {
        let message = bedrock::Message::builder()
            .role(bedrock::ConversationRole::Assistant)
            .set_content(Some(blocks))
            .build()
            .unwrap();
        bedrock::ConverseOutput::Message(message)
    }

    #[test]
    fn test_extract_joins_text_blocks() {
        let output = assistant(vec![
            bedrock::ContentBlock::Text(" SK-IIが".to_string()),
            bedrock::ContentBlock::Text("一番ですのよ ".to_string()),
        ]);
        assert_eq!(extract_text(Some(&output)).unwrap(), "SK-IIが一番ですのよ");
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(matches!(extract_text(None), Err(ProviderError::Rejected(_))));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let output = assistant(vec![bedrock::ContentBlock::Text("  ".to_string())]);
        assert!(matches!(
            extract_text(Some(&output)),
            Err(ProviderError::Rejected(_))
        ));
    }

    #[test]
    fn test_user_message_has_user_role() {
        let message = user_message("お題").unwrap();
        assert_eq!(message.role(), &bedrock::ConversationRole::User);
        assert_eq!(message.content().len(), 1);
    }
}
