use crate::config::RelevanceSettings;
use crate::extractor::PageRecord;

/// A page paired with its relevance to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPage {
    pub page: PageRecord,
    pub score: u32,
}

/// Term-overlap scoring of cached pages against a question.
#[derive(Debug, Clone)]
pub struct RelevanceRanker {
    min_token_chars: usize,
    title_bonus: u32,
    h1_bonus: u32,
    h2_bonus: u32,
    max_ranked: usize,
}

impl RelevanceRanker {
    pub fn new(settings: &RelevanceSettings) -> Self {
        Self {
            min_token_chars: settings.min_token_chars,
            title_bonus: settings.title_bonus,
            h1_bonus: settings.h1_bonus,
            h2_bonus: settings.h2_bonus,
            max_ranked: settings.max_ranked,
        }
    }

    /// Score every page, best first. Zero-score pages are dropped and equal
    /// scores keep their input order.
    pub fn rank(&self, question: &str, pages: &[PageRecord]) -> Vec<ScoredPage> {
        let terms = self.terms(question);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredPage> = pages
            .iter()
            .map(|page| ScoredPage {
                score: self.score(&terms, page),
                page: page.clone(),
            })
            .filter(|scored| scored.score > 0)
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.max_ranked);
        scored
    }

    fn terms(&self, question: &str) -> Vec<String> {
        question
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|token| token.chars().count() > self.min_token_chars)
            .collect()
    }

    fn score(&self, terms: &[String], page: &PageRecord) -> u32 {
        let title = page.title.to_lowercase();
        let h1 = page.headings1.to_lowercase();
        let h2 = page.headings2.to_lowercase();
        let haystack = [
            page.title.as_str(),
            page.headings1.as_str(),
            page.headings2.as_str(),
            page.headings3.as_str(),
            page.body_text.as_str(),
        ]
        .join(" ")
        .to_lowercase();

        let mut score: u32 = 0;
        for term in terms {
            // Literal, non-overlapping
            let occurrences = haystack.matches(term.as_str()).count();
            score = score.saturating_add(u32::try_from(occurrences).unwrap_or(u32::MAX));

            if title.contains(term.as_str()) {
                score = score.saturating_add(self.title_bonus);
            }
            if h1.contains(term.as_str()) {
                score = score.saturating_add(self.h1_bonus);
            }
            if h2.contains(term.as_str()) {
                score = score.saturating_add(self.h2_bonus);
            }
        }
        score
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(&RelevanceSettings::default())
    }
}
