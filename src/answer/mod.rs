//! Turns a question and its ranked pages into an answer.

pub mod fallback;
pub mod prompt;

use std::sync::Arc;
use tracing::error;

use crate::completion::{
    ChatMessage, ChatRequest, CompletionProvider, ParameterFallback, complete_with_fallback,
};
use crate::config::CompletionSettings;
use crate::relevance::ScoredPage;

pub use fallback::{UNAVAILABLE_MESSAGE, fallback_answer};
pub use prompt::{SYSTEM_PROMPT, build_user_prompt};

pub struct AnswerComposer {
    provider: Arc<dyn CompletionProvider>,
    settings: CompletionSettings,
}

impl AnswerComposer {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    pub fn build_request(&self, question: &str, context: &[ScoredPage]) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(
                    question,
                    context,
                    self.settings.context_excerpt_chars,
                )),
            ],
            max_completion_tokens: self.settings.max_completion_tokens,
            temperature: self
                .settings
                .sends_temperature()
                .then_some(self.settings.temperature),
        }
    }

    /// Always produces an answer; provider failures fall back to static text.
    pub async fn answer(&self, question: &str, context: &[ScoredPage]) -> String {
        let request = self.build_request(question, context);
        match complete_with_fallback(
            self.provider.as_ref(),
            &request,
            ParameterFallback::temperature(),
        )
        .await
        {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "Completion failed, using fallback answer");
                fallback_answer(context, self.settings.fallback_excerpt_chars)
            }
        }
    }
}
