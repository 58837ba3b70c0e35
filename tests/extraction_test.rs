//! End-to-end extraction over realistic home pages and subpages.

use serde_json::{Map, Value};
use uri_meta::fetch::NoManifest;
use uri_meta::{Error, ManifestSource, Options, Result, UriMeta, UriMetaExtractor};

const HOME_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Laravel - The PHP Framework For Web Artisans</title>
    <meta name="description" content="Laravel is a PHP web application framework with expressive, elegant syntax.">
    <meta name="keywords" content="php, framework, web, artisans">
    <meta property="og:type" content="website">
    <meta property="og:title" content="Laravel">
    <meta property="og:image" content="/img/og-image.jpg">
    <meta property="og:image:width" content="1200">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="@laravelphp">
    <meta name="twitter:image" content="//laravel.com/img/twitter.jpg">
    <meta name="theme-color" content="#ff2d20">
    <link rel="apple-touch-icon" sizes="180x180" href="/img/apple-touch-icon.png">
    <link rel="icon" type="image/png" sizes="32x32" href="/img/favicon/favicon-32x32.png">
    <link rel="icon" type="image/png" sizes="16x16" href="/img/favicon/favicon-16x16.png">
    <link rel="manifest" href="/img/favicon/site.webmanifest">
</head>
<body><h1>Laravel</h1></body>
</html>"##;

struct StaticManifest(Value);

impl ManifestSource for StaticManifest {
    fn fetch_json(&self, url: &str) -> Result<Map<String, Value>> {
        assert_eq!(url, "https://laravel.com/img/favicon/site.webmanifest");
        match &self.0 {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(Error::Manifest("not an object".into())),
        }
    }
}

fn from_html(extractor: &UriMetaExtractor, html: &str, uri: &str) -> UriMeta {
    match extractor.from_html(html, uri) {
        Ok(meta) => meta,
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn home_page_without_manifest() {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let meta = from_html(&extractor, HOME_PAGE, "https://laravel.com");

    assert_eq!(meta.uri(), "https://laravel.com");
    assert_eq!(meta.host(), Some("laravel.com"));
    assert_eq!(meta.scheme(), "https");
    assert_eq!(meta.title(), "Laravel - The PHP Framework For Web Artisans");
    assert_eq!(meta.slogan(), Some("The PHP Framework For Web Artisans"));
    assert_eq!(
        meta.description(),
        "Laravel is a PHP web application framework with expressive, elegant syntax."
    );
    assert_eq!(meta.keywords(), ["php", "framework", "web", "artisans"]);
    assert_eq!(
        meta.icon_urls(),
        vec![
            "https://laravel.com/img/apple-touch-icon.png",
            "https://laravel.com/img/favicon/favicon-32x32.png",
            "https://laravel.com/img/favicon/favicon-16x16.png",
        ]
    );
    assert_eq!(meta.theme_color(), Some("#ff2d20"));
    assert!(meta.manifest().is_none());
}

#[test]
fn open_graph_and_twitter_properties() {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let meta = from_html(&extractor, HOME_PAGE, "https://laravel.com/");

    assert_eq!(meta.og().get("type").map(String::as_str), Some("website"));
    assert_eq!(meta.og().get("image").map(String::as_str), Some("https://laravel.com/img/og-image.jpg"));
    assert_eq!(meta.og().get("image_width").map(String::as_str), Some("1200"));
    assert_eq!(meta.twitter().get("card").map(String::as_str), Some("summary_large_image"));
    assert_eq!(
        meta.twitter().get("image").map(String::as_str),
        Some("https://laravel.com/img/twitter.jpg")
    );

    for (key, value) in meta.og().iter().chain(meta.twitter()) {
        assert!(!key.is_empty() && !value.is_empty(), "empty entry {key:?} = {value:?}");
    }
}

#[test]
fn manifest_overrides_icons_theme_color_and_site_name() {
    let manifest = StaticManifest(serde_json::json!({
        "name": "Laravel",
        "theme_color": "#f9322c",
        "icons": [
            {"src": "/img/favicon/android-chrome-192x192.png", "sizes": "192x192", "type": "image/png"},
            {"src": "/img/favicon/android-chrome-512x512.png", "sizes": "512x512", "type": "image/png"}
        ]
    }));
    let extractor = UriMetaExtractor::default().with_manifest_source(manifest);
    let meta = from_html(&extractor, HOME_PAGE, "https://laravel.com/");

    assert_eq!(
        meta.icon_urls(),
        vec![
            "https://laravel.com/img/favicon/android-chrome-192x192.png",
            "https://laravel.com/img/favicon/android-chrome-512x512.png",
        ]
    );
    assert_eq!(meta.icons()[0].sizes.as_deref(), Some("192x192"));
    assert_eq!(meta.theme_color(), Some("#f9322c"));
    assert_eq!(meta.site_name(), Some("Laravel"));
    assert!(meta.manifest().is_some_and(|m| m.contains_key("icons")));
}

#[test]
fn subpage_uses_social_title_and_no_slogan() {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let meta = from_html(&extractor, HOME_PAGE, "https://laravel.com/docs/11.x");

    assert_eq!(meta.title(), "Laravel");
    assert_eq!(meta.slogan(), None);
    assert!(meta.manifest().is_none());
}

#[test]
fn page_without_head_elements_gets_default_favicon() {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let meta = from_html(&extractor, "<html><body><p>hi</p></body></html>", "https://site.test/a/b");

    assert_eq!(meta.title(), "site.test");
    assert_eq!(meta.description(), "");
    assert!(meta.keywords().is_empty());
    assert_eq!(meta.icon_urls(), vec!["https://site.test/favicon.ico"]);
}

#[test]
fn chinese_title_split_by_character_length() {
    let html = "<head><title>百度一下，你就知道</title></head>";
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let meta = from_html(&extractor, html, "https://www.baidu.com/");

    assert_eq!(meta.slogan(), Some("你就知道"));
    assert_eq!(meta.site_name(), Some("百度一下"));
}

#[test]
fn strip_slogan_rewrites_title() {
    let options = Options { strip_slogan: true, ..Options::default() };
    let extractor = UriMetaExtractor::new(options).with_manifest_source(NoManifest);
    let meta = from_html(&extractor, HOME_PAGE, "https://laravel.com/");

    assert_eq!(meta.title(), "Laravel");
    assert_eq!(meta.slogan(), Some("The PHP Framework For Web Artisans"));
}

#[test]
fn json_view() {
    let extractor = UriMetaExtractor::default().with_manifest_source(NoManifest);
    let json = from_html(&extractor, HOME_PAGE, "https://laravel.com/").to_json();

    assert_eq!(json["uri"], "https://laravel.com/");
    assert_eq!(json["host"], "laravel.com");
    assert_eq!(json["slogan"], "The PHP Framework For Web Artisans");
    assert_eq!(json["keywords"][0], "php");
    assert_eq!(json["icons"][1]["sizes"], "32x32");
    assert_eq!(json["icons"][1]["type"], "image/png");
    assert_eq!(json["og"]["type"], "website");
    assert!(json.get("manifest").is_none());
}
