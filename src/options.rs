//! Configuration options for metadata extraction.
//!
//! The `Options` struct controls which hosts are skipped, which `<head>`
//! elements feed each field, and how HTML is obtained.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::candidates::Candidate;
use crate::error::{Error, Result};
use crate::fetch::{Driver, FetchDefaults, HttpDriver, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::url_utils::DEFAULT_SKIPS;

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, or load a TOML file where every key is optional.
///
/// # Example
///
/// ```rust
/// use uri_meta::Options;
///
/// let options = Options {
///     skips: vec!["intranet.".to_string()],
///     strip_slogan: true,
///     ..Options::default()
/// };
/// assert!(options.drivers.len() == 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Host prefixes that are never fetched.
    ///
    /// A URL whose host starts with one of these gets a shallow record
    /// titled with its host.
    ///
    /// Default: `["localhost", "127", "172", "192"]`
    pub skips: Vec<String>,

    /// Candidate chains per field.
    pub possibles: Possibles,

    /// HTML drivers, tried in order.
    ///
    /// Default: a single HTTP driver
    pub drivers: Vec<Driver>,

    /// User agent for drivers that do not set their own, and for manifest
    /// requests.
    pub user_agent: String,

    /// Request timeout in seconds.
    ///
    /// Default: `30`
    pub timeout_secs: u64,

    /// Fetch the web-app manifest of host URIs.
    ///
    /// Default: `true`
    pub fetch_manifest: bool,

    /// Replace a host URI's title with its slogan-stripped half.
    ///
    /// `"Acme Corp - Build Better Software"` becomes `"Acme Corp"`.
    ///
    /// Default: `false`
    pub strip_slogan: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skips: DEFAULT_SKIPS.iter().map(ToString::to_string).collect(),
            possibles: Possibles::default(),
            drivers: vec![Driver::Http(HttpDriver::default())],
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fetch_manifest: true,
            strip_slogan: false,
        }
    }
}

impl Options {
    /// Parse options from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `Error::Config` when the document is not valid TOML or does
    /// not match the options shape.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Read options from a TOML file.
    ///
    /// # Errors
    /// Returns `Error::Config` when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path)
            .map_err(|err| Error::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&toml)
    }

    /// Defaults handed to every driver.
    #[must_use]
    pub fn fetch_defaults(&self) -> FetchDefaults {
        FetchDefaults {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Ordered candidate chains, one per field.
///
/// In TOML each chain is an array of `{ selector, field }` tables, where
/// `field` is `"text"`, an attribute name, or an array of attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Possibles {
    /// Title chain for host URIs, tried before `sub_title`.
    pub title: Vec<Candidate>,
    /// Title chain for every page.
    pub sub_title: Vec<Candidate>,
    pub description: Vec<Candidate>,
    pub keywords: Vec<Candidate>,
    /// Icon records; `href` is required, `rel`/`type`/`sizes` are kept.
    pub icon: Vec<Candidate>,
    pub manifest: Vec<Candidate>,
    pub theme_color: Vec<Candidate>,
}

const ICON_ATTRS: &[&str] = &["rel", "type", "sizes", "href"];

impl Default for Possibles {
    fn default() -> Self {
        Self {
            title: vec![
                Candidate::text("title"),
                Candidate::attr(r#"meta[name="apple-mobile-web-app-title"]"#, "content"),
                Candidate::attr(r#"meta[property="og:site_name"]"#, "content"),
                Candidate::attr(r#"meta[name="application-name"]"#, "content"),
            ],
            sub_title: vec![
                Candidate::attr(r#"meta[name="twitter:title"]"#, "content"),
                Candidate::attr(r#"meta[property="og:title"]"#, "content"),
                Candidate::attr(r#"meta[name="title"]"#, "content"),
                Candidate::text("title"),
            ],
            description: vec![
                Candidate::attr(r#"meta[name="description"]"#, "content"),
                Candidate::attr(r#"meta[name="Description"]"#, "content"),
                Candidate::attr(r#"meta[property="og:description"]"#, "content"),
                Candidate::attr(r#"meta[name="twitter:description"]"#, "content"),
            ],
            keywords: vec![
                Candidate::attr(r#"meta[name="keywords"]"#, "content"),
                Candidate::attr(r#"meta[name="Keywords"]"#, "content"),
            ],
            icon: vec![
                Candidate::record(r#"link[rel="apple-touch-icon"]"#, ICON_ATTRS),
                Candidate::record(r#"link[rel="shortcut icon"]"#, ICON_ATTRS),
                Candidate::record(r#"link[rel="Shortcut Icon"]"#, ICON_ATTRS),
                Candidate::record(r#"link[rel="icon"]"#, ICON_ATTRS),
                Candidate::record(r#"link[rel="mask-icon"]"#, ICON_ATTRS),
            ],
            manifest: vec![Candidate::attr(r#"link[rel="manifest"]"#, "href")],
            theme_color: vec![
                Candidate::attr(r#"meta[name="theme-color"]"#, "content"),
                Candidate::attr(r#"meta[name="msapplication-TileColor"]"#, "content"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Field;
    use crate::fetch::HtmlSource;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.skips, vec!["localhost", "127", "172", "192"]);
        assert_eq!(opts.drivers.len(), 1);
        assert_eq!(opts.drivers[0].name(), "http");
        assert_eq!(opts.timeout_secs, 30);
        assert!(opts.fetch_manifest);
        assert!(!opts.strip_slogan);
        assert_eq!(opts.possibles.title[0], Candidate::text("title"));
        assert_eq!(opts.possibles.sub_title.last(), Some(&Candidate::text("title")));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            skips = ["intranet."]
            strip_slogan = true

            [[possibles.description]]
            selector = 'meta[name="summary"]'
            field = "content"
        "#;

        let opts = match Options::from_toml_str(toml) {
            Ok(opts) => opts,
            Err(err) => panic!("expected options, got Err({err:?})"),
        };

        assert_eq!(opts.skips, vec!["intranet."]);
        assert!(opts.strip_slogan);
        assert_eq!(
            opts.possibles.description,
            vec![Candidate::attr(r#"meta[name="summary"]"#, "content")]
        );
        // Untouched chains keep their defaults.
        assert_eq!(opts.possibles.keywords, Possibles::default().keywords);
        assert_eq!(opts.drivers.len(), 1);
    }

    #[test]
    fn test_record_and_text_fields_in_toml() {
        let toml = r#"
            [[possibles.icon]]
            selector = 'link[rel="icon"]'
            field = ["rel", "href"]

            [[possibles.sub_title]]
            selector = "title"
            field = "text"
        "#;

        let opts = match Options::from_toml_str(toml) {
            Ok(opts) => opts,
            Err(err) => panic!("expected options, got Err({err:?})"),
        };

        assert_eq!(opts.possibles.icon[0].field, Field::Attrs(vec!["rel".into(), "href".into()]));
        assert_eq!(opts.possibles.sub_title[0].field, Field::Text);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(Options::from_toml_str("skips = 3"), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        assert!(matches!(
            Options::from_file("/nonexistent/uri-meta.toml"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_fetch_defaults() {
        let opts = Options { timeout_secs: 5, user_agent: "ua".into(), ..Options::default() };
        let defaults = opts.fetch_defaults();
        assert_eq!(defaults.timeout, Duration::from_secs(5));
        assert_eq!(defaults.user_agent, "ua");
    }
}
