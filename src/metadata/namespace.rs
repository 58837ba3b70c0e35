//! Prefixed `<meta>` vocabularies: Open Graph (`og:`) and Twitter cards
//! (`twitter:`).

use std::collections::BTreeMap;

use url::Url;

use crate::dom::{self, Document};
use crate::url_utils;

/// A `<meta>` vocabulary identified by an attribute-value prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: &'static str,
    /// Attribute carrying the property name.
    pub attr: &'static str,
    /// Consulted only when `attr` selects nothing.
    pub fallback_attr: &'static str,
}

impl Namespace {
    pub const OPEN_GRAPH: Namespace = Namespace {
        prefix: "og:",
        attr: "property",
        fallback_attr: "name",
    };

    pub const TWITTER: Namespace = Namespace {
        prefix: "twitter:",
        attr: "name",
        fallback_attr: "property",
    };
}

/// Keys whose values are image URLs and get completed against the page.
const IMAGE_KEYS: &[&str] = &["image", "image_src"];

/// Collect every property of the namespace from `<head>`.
///
/// `og:image:width` becomes `image_width`. A repeated key keeps its last
/// value: repeated tags in the wild are usually corrections.
#[must_use]
pub fn extract_namespace(doc: &Document, base: &Url, ns: Namespace) -> BTreeMap<String, String> {
    let mut results = BTreeMap::new();
    let Some(head) = dom::head(doc) else {
        return results;
    };

    let select = |attr: &str| {
        dom::each(&head, &format!(r#"head > meta[{attr}^="{}"]"#, ns.prefix)).collect::<Vec<_>>()
    };

    let mut attr = ns.attr;
    let mut elements = select(attr);
    if elements.is_empty() {
        attr = ns.fallback_attr;
        elements = select(attr);
    }

    for element in elements {
        let Some(property) = dom::attr_trimmed(&element, attr) else {
            continue;
        };
        let Some(key) = property.strip_prefix(ns.prefix).map(|rest| rest.replace(':', "_")) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let Some(content) = dom::attr_trimmed(&element, "content") else {
            continue;
        };

        let value = if IMAGE_KEYS.contains(&key.as_str()) {
            url_utils::complete_url(&content, base)
        } else {
            content
        };

        results.insert(key, value);
    }

    results
}
