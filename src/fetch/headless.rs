use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use super::{FetchDefaults, HtmlSource};
use crate::error::{Error, Result};

const DEFAULT_BINARY: &str = "chromium";

/// Runs a Chromium-family browser once per page and reads the serialized
/// DOM from stdout, so pages rendered by JavaScript are seen after scripts
/// ran.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadlessDriver {
    /// Browser executable. Defaults to `chromium` on `PATH`.
    pub binary: Option<PathBuf>,
    /// Overrides the default user agent.
    pub user_agent: Option<String>,
    /// Extra browser arguments, e.g. `--no-sandbox`.
    pub args: Vec<String>,
    /// Virtual time the page gets to settle before the DOM is dumped.
    pub virtual_time_budget_ms: Option<u64>,
}

impl HeadlessDriver {
    fn command(&self, url: &str, defaults: &FetchDefaults) -> Command {
        let binary = self
            .binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));
        let user_agent = self.user_agent.as_deref().unwrap_or(&defaults.user_agent);

        let mut command = Command::new(binary);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--dump-dom")
            .arg(format!("--timeout={}", defaults.timeout.as_millis()))
            .arg(format!("--user-agent={user_agent}"));

        if let Some(budget) = self.virtual_time_budget_ms {
            command.arg(format!("--virtual-time-budget={budget}"));
        }

        command.args(&self.args).arg(url);
        command
    }
}

impl HtmlSource for HeadlessDriver {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn fetch_html(&self, url: &str, defaults: &FetchDefaults) -> Result<String> {
        let output = self
            .command(url, defaults)
            .output()
            .map_err(|err| Error::driver(self.name(), err))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::driver(
                self.name(),
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
