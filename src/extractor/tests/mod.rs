use std::fs;

use crate::extractor::extract_page;

#[test]
fn test_extract_products_page() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/products.html")
        .expect("Failed to read test fixture");

    let page = extract_page(&html, "/products.html", "products.html");

    assert_eq!(page.url, "/products.html");
    assert_eq!(page.title, "محصولات ما - نوآوران دیجیتال");
    assert_eq!(page.headings1, "محصولات نوآوران دیجیتال");
    assert_eq!(page.headings2, "نرم‌افزار حسابداری اپلیکیشن فروشگاهی");
    assert_eq!(page.headings3, "قیمت");
    assert!(page.paragraphs.contains("نرم‌افزار حسابداری ابری"));
    assert!(page.list_items.contains("خانه"));
    assert!(page.list_items.contains("تماس"));

    // Body text is whitespace-normalized and free of script/style content
    assert!(page.body_text.contains("قیمت پایه ماهانه ۲۰۰ هزار تومان است."));
    assert!(!page.body_text.contains("analytics"));
    assert!(!page.body_text.contains("font-family"));
    assert!(!page.body_text.contains('\n'));
    assert!(!page.body_text.contains("  "));
}

#[test]
fn test_missing_title_falls_back_to_file_name() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/untitled.html")
        .expect("Failed to read test fixture");

    let page = extract_page(&html, "/about.html", "about.html");

    assert_eq!(page.title, "about.html");
    assert_eq!(page.headings1, "About us");
    assert_eq!(page.headings2, "");
    assert_eq!(page.list_items, "Support Training");
    assert_eq!(
        page.body_text,
        "About us We build small business software. SupportTraining"
    );
}

#[test]
fn test_whitespace_title_falls_back_to_file_name() {
    let html = "<html><head><title>  \n\t </title></head><body><h1>Contact</h1></body></html>";

    let page = extract_page(html, "/contact.html", "contact.html");

    assert_eq!(page.title, "contact.html");
    assert_eq!(page.headings1, "Contact");
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";

    let page = extract_page(html, "/broken.html", "broken.html");

    // Should handle malformed HTML gracefully
    assert_eq!(page.title, "Broken");
    assert!(page.body_text.contains("Unclosed tags"));
    assert!(page.body_text.contains("More content"));
}

#[test]
fn test_empty_document() {
    let page = extract_page("", "/index.html", "index.html");

    assert_eq!(page.title, "index.html");
    assert_eq!(page.body_text, "");
    assert_eq!(page.headings1, "");
}
