//! Splitting a home page title into site name and slogan.
//!
//! Home page titles usually pair a brand with a tagline, joined by whatever
//! punctuation the site prefers:
//!
//! ```text
//! Laravel - The PHP Framework For Web Artisans
//! 36氪_让一部分人先看到未来
//! 说唱帮 | 中文说唱文化爱好者交流平台
//! 友盟+，国内领先的第三方全域数据智能服务商
//! ```
//!
//! Separators are tried in a fixed order and only the first one present is
//! used. Halves naming the host are discarded, and the longer survivor is
//! the slogan.

use crate::url_utils;

/// Separators in priority order.
pub const SEPARATORS: &[char] = &['·', '-', '_', '|', ':', '：', ',', '，'];

/// Brand labels shorter than this are not used for exclusion.
const MIN_BRAND_LABEL_CHARS: usize = 2;

/// Outcome of splitting a title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SloganSplit {
    /// The longer half that does not name the host.
    pub slogan: Option<String>,
    /// The shorter surviving half.
    pub site_name: Option<String>,
    /// The non-slogan half, kept even when it was discarded for naming the
    /// host. This is the slogan-stripped title.
    pub remainder: Option<String>,
}

impl SloganSplit {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slogan.is_none() && self.site_name.is_none()
    }
}

/// Split `title` for a page on `host`.
#[must_use]
pub fn split_slogan(title: &str, host: &str) -> SloganSplit {
    let title = title.trim();

    for separator in SEPARATORS {
        let Some((first, second)) = split_at_separator(title, *separator) else {
            continue;
        };

        let halves = [first.trim(), second.trim()];
        let kept: Vec<usize> = (0..2).filter(|&i| !names_host(halves[i], host)).collect();

        return match kept.as_slice() {
            [] => SloganSplit::default(),
            [only] => SloganSplit {
                slogan: Some(halves[*only].to_string()),
                site_name: None,
                remainder: non_empty(halves[1 - only]),
            },
            _ => {
                // Longer half wins; on a tie the second half is the slogan.
                let slogan = if char_len(halves[0]) > char_len(halves[1]) { 0 } else { 1 };
                SloganSplit {
                    slogan: Some(halves[slogan].to_string()),
                    site_name: Some(halves[1 - slogan].to_string()),
                    remainder: Some(halves[1 - slogan].to_string()),
                }
            }
        };
    }

    SloganSplit::default()
}

/// Split on the first occurrence of `separator`, unless it is absent or the
/// title starts with it.
fn split_at_separator(title: &str, separator: char) -> Option<(&str, &str)> {
    match title.find(separator) {
        Some(index) if index > 0 => {
            Some((&title[..index], &title[index + separator.len_utf8()..]))
        }
        _ => None,
    }
}

/// Whether a half is unusable as a slogan: empty, or contains the host or
/// the host's brand label (case-insensitive).
fn names_host(half: &str, host: &str) -> bool {
    if half.is_empty() {
        return true;
    }

    let half = half.to_lowercase();
    let host = host.trim().to_lowercase();
    if host.is_empty() {
        return false;
    }

    if half.contains(&host) {
        return true;
    }

    url_utils::brand_label(&host)
        .filter(|label| char_len(label) >= MIN_BRAND_LABEL_CHARS)
        .is_some_and(|label| half.contains(label))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
