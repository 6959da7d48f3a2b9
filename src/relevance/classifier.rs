use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::RelevanceSettings;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Small talk, answered without site content.
    General,
    /// Answered from crawled page content.
    SiteSpecific,
}

/// Keyword and length heuristic deciding between general and site questions.
#[derive(Debug, Clone)]
pub struct QuestionClassifier {
    keywords: Vec<String>,
    short_question_chars: usize,
}

impl QuestionClassifier {
    pub fn new(settings: &RelevanceSettings) -> Self {
        Self {
            keywords: settings
                .site_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            short_question_chars: settings.short_question_chars,
        }
    }

    pub fn classify(&self, question: &str) -> QuestionType {
        let lowered = question.to_lowercase();

        // A keyword hit wins regardless of length
        if self.keywords.iter().any(|k| lowered.contains(k.as_str())) {
            return QuestionType::SiteSpecific;
        }

        if question.chars().count() < self.short_question_chars {
            return QuestionType::General;
        }

        QuestionType::SiteSpecific
    }
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new(&RelevanceSettings::default())
    }
}
