use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{manifest_object, FetchDefaults, HtmlSource, ManifestSource};
use crate::encoding;
use crate::error::{Error, Result};

/// Plain HTTP GET driver.
///
/// Sees only server-rendered HTML, which is enough for the `<head>` of most
/// sites.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpDriver {
    /// Overrides the default user agent.
    pub user_agent: Option<String>,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
    /// Overrides the default timeout.
    pub timeout_secs: Option<u64>,
}

fn agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

impl HtmlSource for HttpDriver {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_html(&self, url: &str, defaults: &FetchDefaults) -> Result<String> {
        let timeout = self.timeout_secs.map_or(defaults.timeout, Duration::from_secs);
        let user_agent = self.user_agent.as_deref().unwrap_or(&defaults.user_agent);

        let mut request = agent(timeout).get(url).header("User-Agent", user_agent);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.call().map_err(|err| Error::driver(self.name(), err))?;
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|err| Error::driver(self.name(), err))?;

        Ok(encoding::decode_html(&body, content_type.as_deref()))
    }
}

/// Fetches manifests over HTTP.
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    user_agent: String,
    timeout: Duration,
}

impl HttpManifestSource {
    #[must_use]
    pub fn new(defaults: &FetchDefaults) -> Self {
        Self {
            user_agent: defaults.user_agent.clone(),
            timeout: defaults.timeout,
        }
    }
}

impl Default for HttpManifestSource {
    fn default() -> Self {
        Self::new(&FetchDefaults::default())
    }
}

impl ManifestSource for HttpManifestSource {
    fn fetch_json(&self, url: &str) -> Result<Map<String, Value>> {
        let value: Value = agent(self.timeout)
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/manifest+json, application/json")
            .call()
            .map_err(|err| Error::Manifest(format!("{url}: {err}")))?
            .into_body()
            .read_json()
            .map_err(|err| Error::Manifest(format!("{url}: {err}")))?;

        manifest_object(url, value)
    }
}
