use scraper::{Html, Selector};

use crate::extractor::cleaner::visible_text;
use crate::extractor::model::{PageRecord, normalize_whitespace};

/// Parse a full HTML document into a page record.
///
/// `fallback_title` is used when the document has no usable `<title>`.
pub fn extract_page(html: &str, url: &str, fallback_title: &str) -> PageRecord {
    let document = Html::parse_document(html);

    let title = joined_text(&document, "title");
    let title = if title.trim().is_empty() {
        fallback_title.to_string()
    } else {
        title
    };

    PageRecord {
        url: url.to_string(),
        title,
        headings1: joined_text(&document, "h1"),
        headings2: joined_text(&document, "h2"),
        headings3: joined_text(&document, "h3"),
        paragraphs: joined_text(&document, "p"),
        list_items: joined_text(&document, "li"),
        body_text: normalize_whitespace(&joined_text(&document, "body")),
    }
}

/// Text of every element matching `selector`, joined by single spaces.
fn joined_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .map(visible_text)
        .collect::<Vec<_>>()
        .join(" ")
}
