use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request parameters the provider may reject for some models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalParam {
    Temperature,
}

impl OptionalParam {
    /// Name the provider uses for this parameter in requests and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
        }
    }
}

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn has(&self, param: OptionalParam) -> bool {
        match param {
            OptionalParam::Temperature => self.temperature.is_some(),
        }
    }

    /// Copy of this request with `param` left out.
    pub fn without(&self, param: OptionalParam) -> Self {
        let mut request = self.clone();
        match param {
            OptionalParam::Temperature => request.temperature = None,
        }
        request
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, empty when the provider returned none.
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

/// Error envelope returned by OpenAI-compatible providers.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(temperature: Option<f32>) -> ChatRequest {
        ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("persona"), ChatMessage::user("hi")],
            max_completion_tokens: 500,
            temperature,
        }
    }

    #[test]
    fn test_request_omits_absent_temperature() {
        let body = serde_json::to_value(request(None)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "hi"}
                ],
                "max_completion_tokens": 500
            })
        );
    }

    #[test]
    fn test_without_temperature() {
        let with = request(Some(0.5));
        assert!(with.has(OptionalParam::Temperature));

        let without = with.without(OptionalParam::Temperature);
        assert!(!without.has(OptionalParam::Temperature));
        assert_eq!(without.messages, with.messages);
    }

    #[test]
    fn test_response_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "سلام!"}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "سلام!");
    }

    #[test]
    fn test_response_without_choices_is_empty() {
        let response: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), "");
    }

    #[test]
    fn test_provider_error_body() {
        let body: ProviderErrorBody = serde_json::from_value(json!({
            "error": {
                "message": "Unsupported value: 'temperature'",
                "type": "invalid_request_error",
                "param": "temperature",
                "code": "unsupported_value"
            }
        }))
        .unwrap();
        assert_eq!(body.error.code.as_deref(), Some("unsupported_value"));
        assert_eq!(body.error.param.as_deref(), Some("temperature"));
    }
}
