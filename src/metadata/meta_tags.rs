//! HTML Meta Tag Extraction
//!
//! Single-valued fields read through candidate chains: title, description,
//! keywords, theme color, plus the `<link>` icon records.

use url::Url;

use crate::candidates::{self, Candidate};
use crate::dom::Document;
use crate::options::Possibles;
use crate::result::Icon;
use crate::url_utils;

/// Page title.
///
/// Host URIs try the site-level `title` chain first, then fall through to
/// the `sub_title` chain every page uses.
#[must_use]
pub fn extract_title(doc: &Document, possibles: &Possibles, host_uri: bool) -> Option<String> {
    if host_uri {
        if let Some(title) = candidates::first_value(doc, &possibles.title) {
            return Some(title);
        }
    }

    candidates::first_value(doc, &possibles.sub_title)
}

/// First non-empty description, or `""`.
#[must_use]
pub fn extract_description(doc: &Document, possibles: &Possibles) -> String {
    candidates::first_value(doc, &possibles.description).unwrap_or_default()
}

/// Keywords from the first non-empty keywords tag.
#[must_use]
pub fn extract_keywords(doc: &Document, possibles: &Possibles) -> Vec<String> {
    candidates::first_value(doc, &possibles.keywords)
        .map(|content| split_keywords(&content))
        .unwrap_or_default()
}

/// Split a keywords string on ASCII and CJK commas and the ideographic
/// enumeration comma, dropping empty entries.
#[must_use]
pub fn split_keywords(content: &str) -> Vec<String> {
    content
        .split([',', '，', '、'])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Icons declared with `<link>` tags, completed against `base`.
///
/// Records without an `href` are ignored. May be empty.
#[must_use]
pub fn extract_icons(doc: &Document, chain: &[Candidate], base: &Url) -> Vec<Icon> {
    let icons = candidates::all_records(doc, chain)
        .into_iter()
        .filter_map(|mut record| {
            let href = record.remove("href")?;
            Some(Icon {
                src: url_utils::complete_url(&href, base),
                rel: record.remove("rel"),
                mime_type: record.remove("type"),
                sizes: record.remove("sizes"),
                purpose: None,
            })
        })
        .collect();

    dedupe_icons(icons)
}

/// The conventional `/favicon.ico` of the host.
#[must_use]
pub fn default_icon(base: &Url) -> Icon {
    Icon::new(url_utils::complete_url("/favicon.ico", base))
}

/// Keep the first icon for each `src`.
#[must_use]
pub fn dedupe_icons(icons: Vec<Icon>) -> Vec<Icon> {
    let mut seen: Vec<String> = Vec::with_capacity(icons.len());
    icons
        .into_iter()
        .filter(|icon| {
            if seen.contains(&icon.src) {
                false
            } else {
                seen.push(icon.src.clone());
                true
            }
        })
        .collect()
}

/// Theme color from `<meta>` tags.
#[must_use]
pub fn extract_theme_color(doc: &Document, possibles: &Possibles) -> Option<String> {
    candidates::first_value(doc, &possibles.theme_color)
}
