//! Candidate chains: ordered `(selector, field)` lookups inside `<head>`.
//!
//! A chain is tried in order until a candidate yields data (`first_value`),
//! or fully, collecting everything it yields (`all_values`, `all_records`).
//! Values are trimmed before their emptiness is judged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document, Selection};

/// What to read from a matched element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub enum Field {
    /// The element's text content.
    Text,
    /// A single attribute.
    Attr(String),
    /// Several attributes read together into one record.
    Attrs(Vec<String>),
}

/// Config shape of a field: `"text"`, `"content"` or `["rel", "href"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawField {
    One(String),
    Many(Vec<String>),
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::One(name) if name.eq_ignore_ascii_case("text") => Field::Text,
            RawField::One(name) => Field::Attr(name),
            RawField::Many(names) => Field::Attrs(names),
        }
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        match field {
            Field::Text => RawField::One("text".to_string()),
            Field::Attr(name) => RawField::One(name),
            Field::Attrs(names) => RawField::Many(names),
        }
    }
}

/// One entry of a candidate chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// CSS selector, evaluated below `<head>`.
    pub selector: String,
    /// What to read from the first matching element.
    pub field: Field,
}

impl Candidate {
    /// Read the text content of the matched element.
    #[must_use]
    pub fn text(selector: &str) -> Self {
        Self { selector: selector.to_string(), field: Field::Text }
    }

    /// Read one attribute of the matched element.
    #[must_use]
    pub fn attr(selector: &str, attr: &str) -> Self {
        Self { selector: selector.to_string(), field: Field::Attr(attr.to_string()) }
    }

    /// Read several attributes of each matched element as a record.
    #[must_use]
    pub fn record(selector: &str, attrs: &[&str]) -> Self {
        Self {
            selector: selector.to_string(),
            field: Field::Attrs(attrs.iter().map(ToString::to_string).collect()),
        }
    }

    fn value_of(&self, sel: &Selection) -> Option<String> {
        match &self.field {
            Field::Text => dom::text_trimmed(sel),
            Field::Attr(name) => dom::attr_trimmed(sel, name),
            Field::Attrs(names) => names.iter().find_map(|name| dom::attr_trimmed(sel, name)),
        }
    }

    fn record_of(&self, sel: &Selection) -> BTreeMap<String, String> {
        let names: &[String] = match &self.field {
            Field::Attrs(names) => names,
            Field::Attr(name) => std::slice::from_ref(name),
            Field::Text => &[],
        };

        names
            .iter()
            .filter_map(|name| dom::attr_trimmed(sel, name).map(|value| (name.clone(), value)))
            .collect()
    }
}

/// First non-empty value of the chain, trying candidates in order.
///
/// Each candidate only looks at its first matching element.
#[must_use]
pub fn first_value(doc: &Document, candidates: &[Candidate]) -> Option<String> {
    let head = dom::head(doc)?;

    candidates.iter().find_map(|candidate| {
        dom::first(&head, &candidate.selector).and_then(|sel| candidate.value_of(&sel))
    })
}

/// Every non-empty value of the chain in candidate order, deduplicated
/// with first-seen order preserved.
///
/// Unlike [`first_value`], every element a candidate matches contributes,
/// not just the first one: `link[rel="icon"]` declared at three sizes yields
/// three values.
#[must_use]
pub fn all_values(doc: &Document, candidates: &[Candidate]) -> Vec<String> {
    let Some(head) = dom::head(doc) else {
        return Vec::new();
    };

    let mut values: Vec<String> = Vec::new();
    for candidate in candidates {
        for sel in dom::each(&head, &candidate.selector) {
            if let Some(value) = candidate.value_of(&sel) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
    }

    values
}

/// One attribute record per matching element, in candidate order.
///
/// As with [`all_values`], every match of a candidate is read.
///
/// Records without any non-empty attribute are dropped, as are exact
/// duplicates.
#[must_use]
pub fn all_records(doc: &Document, candidates: &[Candidate]) -> Vec<BTreeMap<String, String>> {
    let Some(head) = dom::head(doc) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for candidate in candidates {
        for sel in dom::each(&head, &candidate.selector) {
            let record = candidate.record_of(&sel);
            if !record.is_empty() && !records.contains(&record) {
                records.push(record);
            }
        }
    }

    records
}
