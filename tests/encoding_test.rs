use uri_meta::encoding::decode_html;
use uri_meta::fetch::NoManifest;
use uri_meta::UriMetaExtractor;

fn title_of(html: &str) -> String {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    match extractor.from_html(html, "https://site.test/page") {
        Ok(meta) => meta.title(),
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

/// UTF-8 pages pass through untouched.
#[test]
fn utf8_title_survives_decoding() {
    let html = "<html><head><meta charset=\"utf-8\"><title>中文 é ñ ü</title></head></html>";
    assert_eq!(title_of(&decode_html(html.as_bytes(), None)), "中文 é ñ ü");
}

/// ISO-8859-1 declared in the document is converted to UTF-8.
#[test]
fn iso88591_meta_charset() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9 M\xFCnchen</title></head></html>";
    assert_eq!(title_of(&decode_html(html, None)), "Café München");
}

/// The response header wins over the document's declaration.
#[test]
fn content_type_header_overrides_meta() {
    // "ÄÖ" in windows-1252
    let html = b"<html><head><meta charset=\"utf-8\"><title>\xC4\xD6</title></head></html>";
    let decoded = decode_html(html, Some("text/html; charset=windows-1252"));
    assert_eq!(title_of(&decoded), "ÄÖ");
}

/// GBK pages declared through `http-equiv`.
#[test]
fn gbk_http_equiv() {
    // "百度" in GBK
    let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=gbk\"><title>\xB0\xD9\xB6\xC8</title></head></html>";
    assert_eq!(title_of(&decode_html(html, None)), "百度");
}

/// Undecodable bytes become replacement characters instead of errors.
#[test]
fn invalid_bytes_are_replaced() {
    let html = b"<html><head><title>ok \xFF\xFE</title></head></html>";
    let title = title_of(&decode_html(html, None));
    assert!(title.starts_with("ok "));
    assert!(title.contains('\u{FFFD}'));
}
