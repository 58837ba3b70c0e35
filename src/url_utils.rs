//! URL Utility Functions
//!
//! URL policy (which URLs get fetched at all), host/authority helpers, and
//! completion of the relative links found in `<head>` (icons, `og:image`,
//! manifest hrefs).

use std::net::IpAddr;

use url::Url;

use crate::error::{Error, Result};

/// Host prefixes that are never fetched by default.
///
/// This is a coarse loopback/private guard: a plain prefix match on the host
/// string, not CIDR-aware.
pub const DEFAULT_SKIPS: &[&str] = &["localhost", "127", "172", "192"];

/// Parse a caller-supplied URL string.
///
/// # Errors
/// Returns `Error::InvalidUrl` when the string is not a URL at all.
pub fn parse_uri(uri: &str) -> Result<Url> {
    Url::parse(uri.trim()).map_err(|source| Error::InvalidUrl {
        url: uri.to_string(),
        source,
    })
}

/// Whether the scheme belongs to the HTTP family.
///
/// Case-insensitive prefix check, so both `http` and `https` qualify.
#[must_use]
pub fn is_http(uri: &Url) -> bool {
    uri.scheme()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

/// Whether the host starts with any of the configured skip prefixes.
#[must_use]
pub fn should_skip<S: AsRef<str>>(uri: &Url, skips: &[S]) -> bool {
    let Some(host) = uri.host_str() else {
        return false;
    };

    skips
        .iter()
        .map(AsRef::as_ref)
        .any(|prefix| !prefix.is_empty() && host.starts_with(prefix))
}

/// A host URI is the site's home page: its path is empty or exactly `/`.
#[must_use]
pub fn is_host_uri(uri: &Url) -> bool {
    matches!(uri.path(), "" | "/")
}

/// Host plus port, with the port only when it is explicit and not the
/// scheme's default.
#[must_use]
pub fn authority(uri: &Url) -> String {
    let host = uri.host_str().unwrap_or_default();
    match uri.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Host in Unicode form: `xn--fsqu00a.xn--0zwm56d` becomes `例子.测试`.
///
/// Hosts that fail IDNA decoding are returned as parsed.
#[must_use]
pub fn unicode_host(uri: &Url) -> String {
    let host = uri.host_str().unwrap_or_default();
    match idna::domain_to_unicode(host) {
        (unicode, Ok(())) => unicode,
        (_, Err(_)) => host.to_string(),
    }
}

/// Title used when a page offers none, or when the URL is never fetched.
#[must_use]
pub fn default_title(uri: &Url) -> String {
    authority(uri)
}

/// `scheme://authority` of a URL, defaulting the scheme to `http`.
#[must_use]
pub fn origin(uri: &Url) -> String {
    format!("{}://{}", scheme_or_http(uri), authority(uri))
}

fn scheme_or_http(uri: &Url) -> &str {
    match uri.scheme() {
        "" => "http",
        scheme => scheme,
    }
}

/// Complete a possibly relative href against the page URL.
///
/// Rules, first match wins:
/// 1. `http://` / `https://` hrefs are returned unchanged.
/// 2. Protocol-relative `//cdn/x` takes the page scheme.
/// 3. Root-relative `/x` is appended to the origin.
/// 4. Anything else is appended to the page path (trailing slash removed).
///
/// Only these four shapes occur for icons, images and manifests, so no
/// general RFC 3986 resolution is done here.
#[must_use]
pub fn complete_url(href: &str, base: &Url) -> String {
    if href.starts_with("https://") || href.starts_with("http://") {
        return href.to_string();
    }

    if href.starts_with("//") {
        return format!("{}:{href}", scheme_or_http(base));
    }

    if href.starts_with('/') {
        return format!("{}{href}", origin(base));
    }

    let base_path = base.path().trim_end_matches('/');
    let relative = href.trim_start_matches("./").trim_start_matches('/');

    format!("{}{base_path}/{relative}", origin(base))
}

/// Generic second-level labels registered under country-code TLDs
/// (`co.uk`, `com.cn`, `org.au`, ...).
const GENERIC_SECOND_LEVEL: &[&str] = &[
    "ac", "co", "com", "edu", "gob", "gov", "govt", "gv", "mil", "ne", "net", "nom", "or", "org", "sch",
];

/// The label naming the site's brand: the one directly left of the public
/// suffix.
///
/// `acme.com` gives `acme`, `www.php.net` gives `php`, `www.argos.co.uk`
/// gives `argos`. A generic label is only treated as part of the suffix
/// under a two-letter country TLD. IP literals and single-label hosts have
/// none.
#[must_use]
pub fn brand_label(host: &str) -> Option<&str> {
    let host = host.trim_end_matches('.');
    if host.parse::<IpAddr>().is_ok() {
        return None;
    }

    let mut labels = host.rsplit('.');
    let tld = labels.next()?;
    let second = labels.next().filter(|label| !label.is_empty())?;

    let country_tld = tld.len() == 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    if country_tld && GENERIC_SECOND_LEVEL.iter().any(|generic| second.eq_ignore_ascii_case(generic)) {
        if let Some(third) = labels.next().filter(|label| !label.is_empty()) {
            return Some(third);
        }
    }

    Some(second)
}
