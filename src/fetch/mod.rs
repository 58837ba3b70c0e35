//! HTML sources and the manifest fetcher.
//!
//! A page's HTML comes from an ordered chain of drivers. The first driver
//! that produces non-empty HTML wins; a failing driver is logged and the
//! chain moves on. Only an exhausted chain is an error.

mod custom;
#[cfg(feature = "devtools")]
mod devtools;
mod headless;
mod http;

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};
use crate::url_utils;

pub use custom::CustomDriver;
#[cfg(feature = "devtools")]
pub use devtools::DevToolsDriver;
pub use headless::HeadlessDriver;
pub use http::{HttpDriver, HttpManifestSource};

/// Desktop Chrome user agent sent when a driver does not set its own.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings every driver falls back to.
#[derive(Debug, Clone)]
pub struct FetchDefaults {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchDefaults {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Something that turns a URL into rendered HTML.
pub trait HtmlSource {
    /// Short name used in logs and driver errors.
    fn name(&self) -> &'static str;

    /// Fetch the HTML of `url`.
    ///
    /// # Errors
    /// Returns `Error::Driver` when this source cannot produce the page.
    fn fetch_html(&self, url: &str, defaults: &FetchDefaults) -> Result<String>;
}

/// A configured HTML driver.
///
/// In configuration files drivers are tagged by `kind`:
///
/// ```toml
/// [[drivers]]
/// kind = "headless"
/// binary = "/usr/bin/chromium"
/// args = ["--no-sandbox"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Driver {
    /// Plain HTTP GET, no JavaScript.
    Http(HttpDriver),
    /// A Chromium-family binary run with `--headless --dump-dom`.
    Headless(HeadlessDriver),
    /// Chrome DevTools protocol, attaching to a running browser or
    /// launching one.
    #[cfg(feature = "devtools")]
    #[serde(rename = "devtools")]
    DevTools(DevToolsDriver),
    /// Inline closure supplied by the caller.
    #[serde(skip)]
    Custom(CustomDriver),
}

impl Driver {
    /// Wrap a closure as a driver. Returning `None` or empty HTML lets the
    /// chain continue.
    pub fn custom<F>(fetch: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Driver::Custom(CustomDriver::new(fetch))
    }

    fn source(&self) -> &dyn HtmlSource {
        match self {
            Driver::Http(driver) => driver,
            Driver::Headless(driver) => driver,
            #[cfg(feature = "devtools")]
            Driver::DevTools(driver) => driver,
            Driver::Custom(driver) => driver,
        }
    }
}

impl HtmlSource for Driver {
    fn name(&self) -> &'static str {
        self.source().name()
    }

    fn fetch_html(&self, url: &str, defaults: &FetchDefaults) -> Result<String> {
        self.source().fetch_html(url, defaults)
    }
}

/// Run the driver chain for `uri`.
///
/// # Errors
/// - `Error::NonFetchableScheme` for URLs outside the http family
/// - `Error::NoHtmlSource` when `drivers` is empty
/// - `Error::FetchExhausted` when no driver produced HTML
pub fn fetch_html(uri: &Url, drivers: &[Driver], defaults: &FetchDefaults) -> Result<String> {
    if !url_utils::is_http(uri) {
        return Err(Error::NonFetchableScheme(uri.to_string()));
    }

    if drivers.is_empty() {
        return Err(Error::NoHtmlSource);
    }

    for driver in drivers {
        match driver.fetch_html(uri.as_str(), defaults) {
            Ok(html) if !html.trim().is_empty() => {
                tracing::debug!(driver = driver.name(), url = %uri, bytes = html.len(), "fetched html");
                return Ok(html);
            }
            Ok(_) => {
                tracing::debug!(driver = driver.name(), url = %uri, "driver returned empty html");
            }
            Err(err) => {
                tracing::warn!(driver = driver.name(), url = %uri, error = %err, "driver failed");
            }
        }
    }

    Err(Error::FetchExhausted(uri.to_string()))
}

/// Fetches and decodes web-app manifests.
pub trait ManifestSource {
    /// Fetch `url` and decode it as a JSON object.
    ///
    /// # Errors
    /// Returns `Error::Manifest` for transport failures, non-success
    /// statuses, and bodies that are not JSON objects.
    fn fetch_json(&self, url: &str) -> Result<Map<String, Value>>;
}

/// Manifest source for callers that never want manifests fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoManifest;

impl ManifestSource for NoManifest {
    fn fetch_json(&self, url: &str) -> Result<Map<String, Value>> {
        Err(Error::Manifest(format!("manifest fetching disabled for {url}")))
    }
}

/// Require a decoded manifest body to be a JSON object.
pub(crate) fn manifest_object(url: &str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Manifest(format!(
            "{url} is not a JSON object (got {})",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
