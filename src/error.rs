//! Error types for uri-meta.
//!
//! Only the fatal kinds reach callers of `extract`. Driver and manifest
//! failures are produced internally, logged, and recovered from.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be parsed as a URL.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No HTML driver is configured.
    #[error("There are no HTML drivers configured")]
    NoHtmlSource,

    /// Every configured driver returned empty HTML.
    #[error("Can't get HTML content of {0}")]
    FetchExhausted(String),

    /// HTML fetching was attempted on a URL that is not http(s).
    #[error("Non-web URL, cannot fetch HTML: {0}")]
    NonFetchableScheme(String),

    /// A single driver failed. Recovered by moving to the next driver.
    #[error("Driver {driver} failed: {message}")]
    Driver { driver: &'static str, message: String },

    /// The web-app manifest could not be fetched or decoded.
    #[error("Manifest unavailable: {0}")]
    Manifest(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error aborts extraction. Everything else degrades to
    /// empty or default field values.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. }
                | Error::NoHtmlSource
                | Error::FetchExhausted(_)
                | Error::NonFetchableScheme(_)
                | Error::Config(_)
        )
    }

    pub(crate) fn driver(driver: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Driver { driver, message: err.to_string() }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
