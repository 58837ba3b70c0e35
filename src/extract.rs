//! The extraction engine.
//!
//! [`UriMetaExtractor`] decides whether a URL is fetched at all, pulls its
//! HTML through the configured driver chain and hands the parsed document to
//! the metadata extractors. It holds configuration only, so one instance can
//! serve any number of calls, from any number of threads.

use std::fmt;

use crate::dom;
use crate::error::Result;
use crate::fetch::{self, HttpManifestSource, ManifestSource};
use crate::metadata::{self, PageContext};
use crate::options::Options;
use crate::result::UriMeta;
use crate::url_utils;

/// Extracts [`UriMeta`] records from URLs.
pub struct UriMetaExtractor {
    options: Options,
    manifests: Box<dyn ManifestSource + Send + Sync>,
}

impl UriMetaExtractor {
    /// Engine with `options` and an HTTP manifest fetcher built from them.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let manifests = Box::new(HttpManifestSource::new(&options.fetch_defaults()));
        Self { options, manifests }
    }

    /// Replace the manifest fetcher.
    #[must_use]
    pub fn with_manifest_source(mut self, source: impl ManifestSource + Send + Sync + 'static) -> Self {
        self.manifests = Box::new(source);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Describe `uri`.
    ///
    /// Non-HTTP URLs and hosts on the skip list get a shallow record titled
    /// with their host and are never fetched.
    ///
    /// # Errors
    /// - `Error::InvalidUrl` when `uri` does not parse
    /// - `Error::NoHtmlSource` when no driver is configured
    /// - `Error::FetchExhausted` when every driver came back empty
    pub fn extract(&self, uri: &str) -> Result<UriMeta> {
        let parsed = url_utils::parse_uri(uri)?;

        if !url_utils::is_http(&parsed) || url_utils::should_skip(&parsed, &self.options.skips) {
            tracing::debug!(uri = %parsed, "not fetching, returning shallow record");
            return Ok(UriMeta::shallow(uri, parsed));
        }

        let html = fetch::fetch_html(&parsed, &self.options.drivers, &self.options.fetch_defaults())?;
        let doc = dom::parse(&html);

        Ok(metadata::extract_metadata(
            PageContext { raw_uri: uri, uri: &parsed, doc: &doc },
            &self.options,
            self.manifests.as_ref(),
        ))
    }

    /// Describe `uri` from HTML the caller already has.
    ///
    /// The skip list does not apply: the page is never fetched. Manifests
    /// are still requested for host URIs unless disabled in the options.
    ///
    /// # Errors
    /// Returns `Error::InvalidUrl` when `uri` does not parse.
    pub fn from_html(&self, html: &str, uri: &str) -> Result<UriMeta> {
        let parsed = url_utils::parse_uri(uri)?;
        let doc = dom::parse(html);

        Ok(metadata::extract_metadata(
            PageContext { raw_uri: uri, uri: &parsed, doc: &doc },
            &self.options,
            self.manifests.as_ref(),
        ))
    }
}

impl Default for UriMetaExtractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for UriMetaExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UriMetaExtractor")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
