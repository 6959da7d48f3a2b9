use std::sync::Arc;

use crate::{
    answer::AnswerComposer,
    completion::{CompletionError, CompletionProvider, OpenAiClient},
    config::{CompletionSettings, Config, RelevanceSettings, SOURCE_DOCUMENTS},
    crawler::{LocalSite, PageSource},
    relevance::{QuestionClassifier, RelevanceRanker, SiteCache},
};

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SiteCache>,
    pub classifier: Arc<QuestionClassifier>,
    pub ranker: Arc<RelevanceRanker>,
    pub composer: Arc<AnswerComposer>,
    /// How many ranked page URLs are returned as `sources`.
    pub max_sources: usize,
}

impl AppState {
    /// Wire the local site crawler and the OpenAI client from `config`.
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let source = Arc::new(LocalSite::new(config.site_root(), SOURCE_DOCUMENTS));
        let provider = Arc::new(OpenAiClient::new(
            config.api_base_url(),
            config.api_key().map(str::to_string),
            config.completion_timeout(),
        )?);
        Ok(Self::from_parts(
            source,
            provider,
            config.relevance(),
            config.completion().clone(),
        ))
    }

    pub fn from_parts(
        source: Arc<dyn PageSource>,
        provider: Arc<dyn CompletionProvider>,
        relevance: &RelevanceSettings,
        completion: CompletionSettings,
    ) -> Self {
        Self {
            cache: Arc::new(SiteCache::new(source, relevance.refresh_interval)),
            classifier: Arc::new(QuestionClassifier::new(relevance)),
            ranker: Arc::new(RelevanceRanker::new(relevance)),
            composer: Arc::new(AnswerComposer::new(provider, completion)),
            max_sources: relevance.max_sources,
        }
    }
}
