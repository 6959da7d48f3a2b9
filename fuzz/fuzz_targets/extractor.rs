#![no_main]

use libfuzzer_sys::fuzz_target;

use sitefaq::extractor::extract_page;
use sitefaq::relevance::RelevanceRanker;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data).to_string();

    // Extraction and ranking should never panic regardless of input
    let page = extract_page(&html, "/fuzz.html", "fuzz.html");
    let question = page.body_text.chars().take(64).collect::<String>();
    let _ = RelevanceRanker::default().rank(&question, &[page]);
});
