//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` giving the extractors trimmed attribute and
//! text access scoped to the document `<head>`.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The document's `<head>` element, if any.
#[must_use]
pub fn head(doc: &Document) -> Option<Selection<'_>> {
    let head = doc.select_single("head");
    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}

/// Attribute value, trimmed. Empty values are `None`.
#[must_use]
pub fn attr_trimmed(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Text content of node and descendants, trimmed. Empty text is `None`.
#[must_use]
pub fn text_trimmed(sel: &Selection) -> Option<String> {
    let text = sel.text();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Every element matching `selector` below `sel`, one selection per node.
///
/// Selectors come from user configuration, so an unparsable selector
/// matches nothing instead of panicking.
pub fn each<'a>(sel: &Selection<'a>, selector: &str) -> impl Iterator<Item = Selection<'a>> {
    sel.try_select(selector)
        .map(|matched| {
            matched
                .nodes()
                .iter()
                .map(|node| Selection::from(*node))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
        .into_iter()
}

/// First element matching `selector` below `sel`.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    each(sel, selector).next()
}
