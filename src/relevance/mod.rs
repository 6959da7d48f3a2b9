//! Question classification, page ranking and the page cache they read from.

pub mod cache;
pub mod classifier;
pub mod ranker;

pub use cache::{SiteCache, SiteSnapshot};
pub use classifier::{QuestionClassifier, QuestionType};
pub use ranker::{RelevanceRanker, ScoredPage};
