use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// Structured text of one crawled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Site-relative path, e.g. `/products.html`.
    pub url: String,
    pub title: String,
    pub headings1: String,
    pub headings2: String,
    pub headings3: String,
    pub paragraphs: String,
    pub list_items: String,
    /// Whole `<body>` text with whitespace collapsed.
    pub body_text: String,
}

/// Collapse every whitespace run (including newlines) into one space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let text = "  Hello    world  \n\n\n  Test\t ";
        assert_eq!(normalize_whitespace(text), "Hello world Test");
    }

    #[test]
    fn test_normalize_whitespace_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }
}
