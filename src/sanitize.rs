//! Structured pronoun input.
//!
//! Besides free text, callers may hand over a list of forms
//! (`["she", "her"]`) or an object carrying such a list in a `pronouns`
//! field. [`PronounInput`] classifies raw input once, at the boundary, and
//! [`resolve_input`] routes each kind to its resolver.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::expand::{expand_string, is_wildcard, split_slugs};
use crate::matcher::find_first;
use crate::table::{Row, Table};

/// An object exposing a `pronouns` list of forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSet {
    pub pronouns: Vec<String>,
}

impl NamedSet {
    pub fn new<I, S>(pronouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pronouns: pronouns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every shape of input a profile can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PronounInput {
    /// A free-text descriptor such as `"they/them or ze/hir"`.
    Text(String),
    /// The forms of a single set, in slot order.
    FormSequence(Vec<String>),
    /// An object with a `pronouns` field holding forms.
    NamedSet(NamedSet),
    /// Anything else; resolves to the fallback row.
    Unrecognized,
}

impl PronounInput {
    /// Classify an arbitrary JSON value.
    ///
    /// Strings are descriptors, arrays of strings are form sequences, and
    /// objects whose `pronouns` field is an array of strings are named sets.
    /// Numbers, booleans, null and mixed arrays are unrecognized.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(items) => match string_list(items) {
                Some(forms) => Self::FormSequence(forms),
                None => Self::Unrecognized,
            },
            Value::Object(fields) => match fields.get("pronouns") {
                Some(Value::Array(items)) => match string_list(items) {
                    Some(pronouns) => Self::NamedSet(NamedSet { pronouns }),
                    None => Self::Unrecognized,
                },
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Whether this input declares that any pronouns are acceptable.
    ///
    /// Only free text can say so.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Text(text) => is_wildcard(text),
            _ => false,
        }
    }
}

fn string_list(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

impl From<&str> for PronounInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PronounInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for PronounInput {
    fn from(forms: Vec<String>) -> Self {
        Self::FormSequence(forms)
    }
}

impl From<Vec<&str>> for PronounInput {
    fn from(forms: Vec<&str>) -> Self {
        Self::FormSequence(forms.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PronounInput {
    fn from(forms: &[&str]) -> Self {
        Self::FormSequence(forms.iter().map(|form| form.to_string()).collect())
    }
}

impl From<NamedSet> for PronounInput {
    fn from(set: NamedSet) -> Self {
        Self::NamedSet(set)
    }
}

impl From<&Value> for PronounInput {
    fn from(value: &Value) -> Self {
        Self::from_json(value)
    }
}

impl From<Value> for PronounInput {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

/// Resolve the forms of one set to the first table row they lead.
///
/// Forms may themselves contain slashes; the result always equals expanding
/// the slash-joined forms as a single descriptor segment.
pub fn sanitize_set<'t, S: AsRef<str>>(forms: &[S], table: &'t Table) -> Vec<&'t Row> {
    let slugs: Vec<&str> = forms
        .iter()
        .flat_map(|form| split_slugs(form.as_ref()))
        .collect();
    if slugs.is_empty() {
        return Vec::new();
    }
    find_first(&slugs, table).into_iter().collect()
}

/// Resolve any input to its rows.
///
/// Unrecognized input resolves to the table's fallback row.
pub fn resolve_input<'t>(input: &PronounInput, table: &'t Table) -> Vec<&'t Row> {
    match input {
        PronounInput::Text(text) => expand_string(text, table),
        PronounInput::FormSequence(forms) => sanitize_set(forms, table),
        PronounInput::NamedSet(set) => sanitize_set(&set.pronouns, table),
        PronounInput::Unrecognized => vec![table.fallback()],
    }
}
