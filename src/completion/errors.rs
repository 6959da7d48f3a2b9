use reqwest::StatusCode;
use thiserror::Error;

use crate::completion::types::ProviderErrorBody;

const UNSUPPORTED_VALUE_CODE: &str = "unsupported_value";

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("no api key configured")]
    MissingApiKey,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("request timeout")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider error {status}: {message}")]
    Provider {
        status: StatusCode,
        code: Option<String>,
        param: Option<String>,
        message: String,
    },

    #[error("decode error: {0}")]
    Decode(String),
}

impl CompletionError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Build a provider error from a non-success response body.
    pub fn from_provider_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(parsed) => Self::Provider {
                status,
                code: parsed.error.code,
                param: parsed.error.param,
                message: parsed.error.message.unwrap_or_default(),
            },
            Err(_) => Self::Provider {
                status,
                code: None,
                param: None,
                message: body.to_string(),
            },
        }
    }

    /// The parameter the provider rejected as an unsupported value, if that is
    /// what this error is.
    pub fn unsupported_parameter(&self) -> Option<&str> {
        match self {
            Self::Provider {
                code: Some(code),
                param: Some(param),
                ..
            } if code == UNSUPPORTED_VALUE_CODE => Some(param.as_str()),
            _ => None,
        }
    }
}
