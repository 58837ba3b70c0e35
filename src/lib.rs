//! # uri-meta
//!
//! Link-preview metadata for arbitrary URLs.
//!
//! Given a URL, this library fetches the page's HTML through an ordered chain
//! of drivers (plain HTTP, a headless browser binary, the Chrome DevTools
//! protocol, or a caller-supplied closure) and extracts the fields a link
//! preview needs: title, slogan, description, keywords, icons, Open Graph and
//! Twitter card properties, web-app manifest data and theme color.
//!
//! ## Quick Start
//!
//! ```rust
//! use uri_meta::from_html;
//!
//! let html = r#"<html><head>
//!     <title>Acme Corp - Build Better Software</title>
//!     <meta name="keywords" content="tools, software">
//! </head><body></body></html>"#;
//!
//! let meta = from_html(html, "https://acme.com/")?;
//! assert_eq!(meta.slogan(), Some("Build Better Software"));
//! assert_eq!(meta.keywords(), ["tools", "software"]);
//! assert_eq!(meta.icon_urls(), vec!["https://acme.com/favicon.ico"]);
//! # Ok::<(), uri_meta::Error>(())
//! ```
//!
//! ## Skipped URLs
//!
//! Local and private hosts (`localhost`, `127.*`, `172.*`, `192.*` by
//! default) and non-HTTP schemes are never fetched. They get a shallow record
//! whose title is `host[:port]`.

mod error;
mod extract;
mod options;
mod result;

/// Ordered selector/attribute candidate chains.
pub mod candidates;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTML drivers and the manifest fetcher.
pub mod fetch;

/// Metadata extractors (meta tags, Open Graph, Twitter, manifest, slogan).
pub mod metadata;

/// URL policy and completion.
pub mod url_utils;

// Public API - re-exports
pub use candidates::{Candidate, Field};
pub use error::{Error, Result};
pub use extract::UriMetaExtractor;
pub use fetch::{Driver, HtmlSource, ManifestSource};
pub use options::{Options, Possibles};
pub use result::{Icon, UriMeta};

/// Describes a URL using default options.
///
/// # Example
///
/// ```rust,no_run
/// let meta = uri_meta::extract("https://www.rust-lang.org/")?;
/// println!("{}: {}", meta.title(), meta.description());
/// # Ok::<(), uri_meta::Error>(())
/// ```
///
/// # Errors
/// Fails when the URL does not parse or no driver produced HTML.
pub fn extract(uri: &str) -> Result<UriMeta> {
    UriMetaExtractor::default().extract(uri)
}

/// Describes a URL from HTML the caller already fetched, using default
/// options.
///
/// # Errors
/// Returns `Error::InvalidUrl` when `uri` does not parse.
pub fn from_html(html: &str, uri: &str) -> Result<UriMeta> {
    UriMetaExtractor::default().from_html(html, uri)
}
