use tracing::warn;

use crate::completion::{
    client::CompletionProvider,
    errors::CompletionError,
    types::{ChatRequest, OptionalParam},
};

/// Retry once without `param` when the provider rejects its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFallback {
    pub param: OptionalParam,
}

impl ParameterFallback {
    pub fn temperature() -> Self {
        Self {
            param: OptionalParam::Temperature,
        }
    }

    pub fn applies(&self, request: &ChatRequest, err: &CompletionError) -> bool {
        request.has(self.param) && err.unsupported_parameter() == Some(self.param.name())
    }
}

/// Send `request`, retrying exactly once under `fallback` if it applies.
pub async fn complete_with_fallback(
    provider: &dyn CompletionProvider,
    request: &ChatRequest,
    fallback: ParameterFallback,
) -> Result<String, CompletionError> {
    match provider.complete(request).await {
        Ok(text) => Ok(text),
        Err(err) if fallback.applies(request, &err) => {
            warn!(
                param = fallback.param.name(),
                "Model rejected parameter value, retrying without it"
            );
            provider.complete(&request.without(fallback.param)).await
        }
        Err(err) => Err(err),
    }
}
