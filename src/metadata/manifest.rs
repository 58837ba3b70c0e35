//! Web-app manifest lookup.
//!
//! `<link rel="manifest" href="/site.webmanifest">` points at a JSON
//! document that may carry the site name, theme color and icons. A missing
//! or broken manifest never fails extraction.

use serde_json::{Map, Value};
use url::Url;

use crate::candidates::{self, Candidate};
use crate::dom::Document;
use crate::fetch::ManifestSource;
use crate::result::Icon;
use crate::url_utils;

/// Absolute manifest URL declared by the page.
#[must_use]
pub fn manifest_url(doc: &Document, chain: &[Candidate], base: &Url) -> Option<String> {
    let href = candidates::first_value(doc, chain)?;
    let href = urlencoding::decode(&href).map_or(href.clone(), |decoded| decoded.into_owned());
    Some(url_utils::complete_url(&href, base))
}

/// Fetch the page's manifest. Failures are logged and yield `None`.
#[must_use]
pub fn fetch_manifest(
    doc: &Document,
    chain: &[Candidate],
    base: &Url,
    source: &dyn ManifestSource,
) -> Option<Map<String, Value>> {
    let url = manifest_url(doc, chain, base)?;

    match source.fetch_json(&url) {
        Ok(manifest) => Some(manifest),
        Err(err) => {
            tracing::debug!(manifest = %url, error = %err, "ignoring unavailable manifest");
            None
        }
    }
}

/// Non-empty trimmed string member of the manifest.
#[must_use]
pub fn string_member(manifest: &Map<String, Value>, key: &str) -> Option<String> {
    manifest
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Site name: `name`, else `short_name`.
#[must_use]
pub fn site_name(manifest: &Map<String, Value>) -> Option<String> {
    string_member(manifest, "name").or_else(|| string_member(manifest, "short_name"))
}

/// Icons listed in the manifest, completed against the page URL.
///
/// Entries without a usable `src` are skipped.
#[must_use]
pub fn manifest_icons(manifest: &Map<String, Value>, base: &Url) -> Vec<Icon> {
    let Some(entries) = manifest.get("icons").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let src = string_member(entry, "src")?;
            Some(Icon {
                src: url_utils::complete_url(&src, base),
                rel: None,
                mime_type: string_member(entry, "type"),
                sizes: string_member(entry, "sizes"),
                purpose: string_member(entry, "purpose"),
            })
        })
        .collect()
}
