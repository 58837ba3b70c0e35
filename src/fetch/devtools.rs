use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::path::PathBuf;

use headless_chrome::{Browser, LaunchOptions};
use serde::Deserialize;
use serde_json::Value;

use super::{FetchDefaults, HtmlSource};
use crate::error::{Error, Result};

const DEFAULT_DEBUGGING_PORT: u16 = 9222;
const PORT_FLAG: &str = "--remote-debugging-port=";

/// Chrome DevTools protocol driver.
///
/// Connection order: the configured websocket endpoint, then the
/// `/json/version` endpoint of a browser already listening on the debugging
/// port, then a freshly launched browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevToolsDriver {
    pub ws_endpoint: Option<String>,
    pub debugging_port: Option<u16>,
    /// Browser executable used when launching.
    pub binary: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub headers: BTreeMap<String, String>,
    /// Extra launch flags. A `--remote-debugging-port=` flag here also sets
    /// the debugging port.
    pub custom_flags: Vec<String>,
}

impl DevToolsDriver {
    fn debugging_port(&self) -> u16 {
        self.debugging_port
            .or_else(|| {
                self.custom_flags.iter().find_map(|flag| {
                    flag.to_ascii_lowercase()
                        .strip_prefix(PORT_FLAG)
                        .and_then(|port| port.parse().ok())
                })
            })
            .unwrap_or(DEFAULT_DEBUGGING_PORT)
    }

    fn ws_endpoint(&self, defaults: &FetchDefaults) -> Option<String> {
        if let Some(endpoint) = self.ws_endpoint.as_ref().filter(|e| !e.is_empty()) {
            return Some(endpoint.clone());
        }

        let version_url = format!("http://127.0.0.1:{}/json/version", self.debugging_port());
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(defaults.timeout))
            .build()
            .into();

        let version: Value = agent.get(&version_url).call().ok()?.into_body().read_json().ok()?;
        version
            .get("webSocketDebuggerUrl")
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }

    fn browser(&self, defaults: &FetchDefaults) -> Result<Browser> {
        if let Some(endpoint) = self.ws_endpoint(defaults) {
            tracing::debug!(%endpoint, "attaching to running browser");
            return Browser::connect(endpoint).map_err(fail);
        }

        let flags: Vec<&OsStr> = self
            .custom_flags
            .iter()
            .filter(|flag| !flag.to_ascii_lowercase().starts_with(PORT_FLAG))
            .map(OsStr::new)
            .collect();

        let options = LaunchOptions::default_builder()
            .headless(true)
            .path(self.binary.clone())
            .port(Some(self.debugging_port()))
            .idle_browser_timeout(defaults.timeout)
            .args(flags)
            .build()
            .map_err(fail)?;

        Browser::new(options).map_err(fail)
    }
}

impl HtmlSource for DevToolsDriver {
    fn name(&self) -> &'static str {
        "devtools"
    }

    fn fetch_html(&self, url: &str, defaults: &FetchDefaults) -> Result<String> {
        let browser = self.browser(defaults)?;
        let tab = browser.new_tab().map_err(fail)?;

        let user_agent = self.user_agent.as_deref().unwrap_or(&defaults.user_agent);
        tab.set_user_agent(user_agent, None, None).map_err(fail)?;

        if !self.headers.is_empty() {
            let headers: HashMap<&str, &str> = self
                .headers
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            tab.set_extra_http_headers(headers).map_err(fail)?;
        }

        let html = tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .and_then(|tab| tab.get_content())
            .map_err(fail);

        if let Err(err) = tab.close(true) {
            tracing::debug!(error = %err, "closing devtools tab failed");
        }

        html
    }
}

fn fail(err: impl std::fmt::Display) -> Error {
    Error::driver("devtools", err)
}
