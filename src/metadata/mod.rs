//! Metadata extraction module.
//!
//! Runs the individual extractors over one parsed page and assembles the
//! [`UriMeta`] record:
//!
//! 1. title (host URIs consult the site-level chain first)
//! 2. description and keywords
//! 3. `<link>` icons
//! 4. web-app manifest (host URIs only): theme color, name, icons
//! 5. Open Graph, then Twitter cards
//! 6. title/slogan split (host URIs only)
//! 7. theme color from `<meta>` when the manifest had none
//!
//! Site name precedence is `og:site_name`, then the manifest name, then the
//! splitter. Manifest icons replace `<link>` icons when there are any, and
//! an empty icon list falls back to `/favicon.ico`.

pub mod manifest;
pub mod meta_tags;
pub mod namespace;
pub mod slogan;

use url::Url;

use crate::dom::Document;
use crate::fetch::ManifestSource;
use crate::options::Options;
use crate::result::UriMeta;
use crate::url_utils;

pub use namespace::{extract_namespace, Namespace};
pub use slogan::{split_slogan, SloganSplit};

/// Per-call state: the URL being described and its parsed document.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    /// The URL as the caller gave it.
    pub raw_uri: &'a str,
    pub uri: &'a Url,
    pub doc: &'a Document,
}

/// Extract all metadata from a page.
#[must_use]
pub fn extract_metadata(
    ctx: PageContext<'_>,
    options: &Options,
    manifests: &dyn ManifestSource,
) -> UriMeta {
    let PageContext { raw_uri, uri, doc } = ctx;
    let possibles = &options.possibles;
    let host_uri = url_utils::is_host_uri(uri);

    let mut meta = UriMeta::new(raw_uri, uri.clone());

    let found_title = meta_tags::extract_title(doc, possibles, host_uri);
    meta.title = found_title.clone().unwrap_or_else(|| url_utils::default_title(uri));
    meta.description = meta_tags::extract_description(doc, possibles);
    meta.keywords = meta_tags::extract_keywords(doc, possibles);

    let link_icons = meta_tags::extract_icons(doc, &possibles.icon, uri);

    let mut manifest_name = None;
    let mut manifest_icons = Vec::new();
    if host_uri && options.fetch_manifest {
        if let Some(found) = manifest::fetch_manifest(doc, &possibles.manifest, uri, manifests) {
            meta.theme_color = manifest::string_member(&found, "theme_color");
            manifest_name = manifest::site_name(&found);
            manifest_icons = meta_tags::dedupe_icons(manifest::manifest_icons(&found, uri));
            meta.manifest = Some(found);
        }
    }

    meta.icons = if !manifest_icons.is_empty() {
        manifest_icons
    } else if !link_icons.is_empty() {
        link_icons
    } else {
        vec![meta_tags::default_icon(uri)]
    };

    meta.og = namespace::extract_namespace(doc, uri, Namespace::OPEN_GRAPH);
    meta.twitter = namespace::extract_namespace(doc, uri, Namespace::TWITTER);

    let mut split_site_name = None;
    // A title synthesized from the host has nothing to split.
    if let (true, Some(title)) = (host_uri, &found_title) {
        let split = slogan::split_slogan(title, &url_utils::unicode_host(uri));
        if options.strip_slogan && split.slogan.is_some() {
            if let Some(remainder) = &split.remainder {
                meta.title.clone_from(remainder);
            }
        }
        meta.slogan = split.slogan;
        split_site_name = split.site_name;
    }

    meta.site_name = meta
        .og
        .get("site_name")
        .cloned()
        .or(manifest_name)
        .or(split_site_name);

    if meta.theme_color.is_none() {
        meta.theme_color = meta_tags::extract_theme_color(doc, possibles);
    }

    meta
}
