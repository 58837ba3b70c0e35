use std::fmt;
use std::sync::Arc;

use super::{FetchDefaults, HtmlSource};
use crate::error::Result;

type FetchFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Caller-supplied HTML producer.
#[derive(Clone)]
pub struct CustomDriver {
    fetch: Arc<FetchFn>,
}

impl CustomDriver {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self { fetch: Arc::new(fetch) }
    }
}

impl fmt::Debug for CustomDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDriver").finish_non_exhaustive()
    }
}

impl HtmlSource for CustomDriver {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn fetch_html(&self, url: &str, _defaults: &FetchDefaults) -> Result<String> {
        Ok((self.fetch)(url).unwrap_or_default())
    }
}
