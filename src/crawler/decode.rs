use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Decode raw document bytes to UTF-8 text. Malformed sequences become
/// U+FFFD rather than failing the document.
pub fn decode_document(bytes: &[u8]) -> String {
    let encoding = detect_charset(bytes);
    decode_to_utf8(bytes, encoding)
}

fn detect_charset(bytes: &[u8]) -> &'static Encoding {
    // 1. Byte order mark
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    // 2. <meta charset> in the first 4KB
    let search_bytes = &bytes[..bytes.len().min(4096)];
    let search_str = String::from_utf8_lossy(search_bytes);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(encoding) = regex
            .captures(&search_str)
            .and_then(|captures| captures.get(1))
            .and_then(|label| Encoding::for_label(label.as_str().to_lowercase().as_bytes()))
        {
            return encoding;
        }
    }

    // 3. Valid UTF-8 needs no guessing
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    // 4. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    detector.guess(None, true)
}

fn decode_to_utf8(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!(
            encoding = used.name(),
            "Malformed byte sequences replaced while decoding document"
        );
    }

    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";
        // ISO-8859-1 gets mapped to Windows1252 by encoding_rs since it's a superset
        assert_eq!(detect_charset(body), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_detect_charset_from_meta_http_equiv() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1256\"><title>Test</title></head></html>";
        assert_eq!(detect_charset(body), encoding_rs::WINDOWS_1256);
    }

    #[test]
    fn test_utf8_without_declaration() {
        let body = "<html><body>سلام دنیا</body></html>".as_bytes();
        assert_eq!(detect_charset(body), UTF_8);
        assert_eq!(
            decode_document(body),
            "<html><body>سلام دنیا</body></html>"
        );
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut body = vec![0xEF, 0xBB, 0xBF];
        body.extend_from_slice(b"<p>hi</p>");
        assert_eq!(decode_document(&body), "<p>hi</p>");
    }

    #[test]
    fn test_declared_utf8_with_invalid_bytes_is_replaced() {
        let body = b"<meta charset=\"utf-8\"><p>\xFF\xFE broken</p>";
        let decoded = decode_document(body);
        assert_eq!(
            decoded,
            "<meta charset=\"utf-8\"><p>\u{FFFD}\u{FFFD} broken</p>"
        );
    }
}
