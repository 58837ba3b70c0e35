//! Result types for extraction output.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::url_utils;

/// An icon declared by the page or its manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Absolute icon URL.
    pub src: String,

    /// `rel` of the declaring `<link>` (`icon`, `apple-touch-icon`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// Declared MIME type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Declared sizes, e.g. `32x32` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,

    /// Manifest icon purpose (`any`, `maskable`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl Icon {
    /// Icon with only a source URL.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into(), ..Self::default() }
    }
}

/// Metadata extracted for one URL.
///
/// Built once per extraction and read-only afterwards. Optional fields are
/// `None` when no source provided them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UriMeta {
    uri: String,
    #[serde(skip)]
    parsed: Url,
    pub(crate) title: String,
    pub(crate) slogan: Option<String>,
    pub(crate) description: String,
    pub(crate) keywords: Vec<String>,
    pub(crate) icons: Vec<Icon>,
    pub(crate) og: BTreeMap<String, String>,
    pub(crate) twitter: BTreeMap<String, String>,
    pub(crate) manifest: Option<Map<String, Value>>,
    pub(crate) theme_color: Option<String>,
    pub(crate) site_name: Option<String>,
}

impl UriMeta {
    /// Empty record for `uri`; the extraction pipeline fills it in.
    pub(crate) fn new(uri: &str, parsed: Url) -> Self {
        Self {
            uri: uri.trim().to_string(),
            parsed,
            title: String::new(),
            slogan: None,
            description: String::new(),
            keywords: Vec::new(),
            icons: Vec::new(),
            og: BTreeMap::new(),
            twitter: BTreeMap::new(),
            manifest: None,
            theme_color: None,
            site_name: None,
        }
    }

    /// Shallow record for URLs that are never fetched.
    pub(crate) fn shallow(uri: &str, parsed: Url) -> Self {
        let mut meta = Self::new(uri, parsed);
        meta.title = url_utils::default_title(&meta.parsed);
        meta
    }

    /// The URL as given.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Page title, or `host[:port]` when the page had none.
    #[must_use]
    pub fn title(&self) -> String {
        if self.title.is_empty() {
            self.default_title()
        } else {
            self.title.clone()
        }
    }

    /// Bare `host[:port]`.
    #[must_use]
    pub fn default_title(&self) -> String {
        url_utils::default_title(&self.parsed)
    }

    #[must_use]
    pub fn slogan(&self) -> Option<&str> {
        self.slogan.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Absolute icon URLs in priority order.
    #[must_use]
    pub fn icon_urls(&self) -> Vec<&str> {
        self.icons.iter().map(|icon| icon.src.as_str()).collect()
    }

    /// Open Graph properties keyed without the `og:` prefix.
    #[must_use]
    pub fn og(&self) -> &BTreeMap<String, String> {
        &self.og
    }

    /// Twitter card properties keyed without the `twitter:` prefix.
    #[must_use]
    pub fn twitter(&self) -> &BTreeMap<String, String> {
        &self.twitter
    }

    /// Decoded web-app manifest (host URIs only).
    #[must_use]
    pub fn manifest(&self) -> Option<&Map<String, Value>> {
        self.manifest.as_ref()
    }

    #[must_use]
    pub fn theme_color(&self) -> Option<&str> {
        self.theme_color.as_deref()
    }

    #[must_use]
    pub fn site_name(&self) -> Option<&str> {
        self.site_name.as_deref()
    }

    /// JSON view with `uri`, `host`, `scheme` and the resolved `title`.
    ///
    /// Absent optional fields and empty `og`/`twitter` maps are omitted.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert("uri".into(), Value::from(self.uri.as_str()));
        json.insert("host".into(), self.host().map_or(Value::Null, Value::from));
        json.insert("scheme".into(), Value::from(self.scheme()));
        json.insert("title".into(), Value::from(self.title()));
        json.insert("description".into(), Value::from(self.description.as_str()));
        json.insert("keywords".into(), Value::from(self.keywords.clone()));
        json.insert(
            "icons".into(),
            serde_json::to_value(&self.icons).unwrap_or_else(|_| Value::Array(Vec::new())),
        );

        if let Some(slogan) = &self.slogan {
            json.insert("slogan".into(), Value::from(slogan.as_str()));
        }
        if !self.og.is_empty() {
            json.insert("og".into(), string_map(&self.og));
        }
        if !self.twitter.is_empty() {
            json.insert("twitter".into(), string_map(&self.twitter));
        }
        if let Some(manifest) = &self.manifest {
            json.insert("manifest".into(), Value::Object(manifest.clone()));
        }
        if let Some(site_name) = &self.site_name {
            json.insert("site_name".into(), Value::from(site_name.as_str()));
        }
        if let Some(theme_color) = &self.theme_color {
            json.insert("theme_color".into(), Value::from(theme_color.as_str()));
        }

        Value::Object(json)
    }
}

fn string_map(map: &BTreeMap<String, String>) -> Value {
    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect(),
    )
}
