//! Core types for parsed `.toml` fixture files.

use pronoun_sets::{NamedSet, PronounInput};
use serde::{Deserialize, Serialize};

use crate::errors::{SpecError, SpecResult};

/// A parsed fixture document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecFixture {
    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// Rows to test against instead of the built-in table
    #[serde(default)]
    pub table: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub expand: Vec<ExpandCase>,
    #[serde(default)]
    pub path: Vec<PathCase>,
    #[serde(default)]
    pub complete: Vec<CompleteCase>,
    #[serde(default)]
    pub profile: Vec<ProfileCase>,
}

impl SpecFixture {
    /// Total number of cases across all kinds.
    pub fn case_count(&self) -> usize {
        self.expand.len() + self.path.len() + self.complete.len() + self.profile.len()
    }
}

/// `expand_string(input)` must produce exactly `expect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandCase {
    pub input: String,
    pub expect: Vec<Vec<String>>,
}

/// The shortest unambiguous path of `row`, slash-joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathCase {
    pub row: Vec<String>,
    pub expect: String,
}

/// Completion of `input`.
///
/// `expect` pins the full ordered output; `includes` and `excludes` check
/// individual candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompleteCase {
    pub input: String,
    #[serde(default)]
    pub expect: Option<Vec<String>>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// A profile built from one of `input`, `forms` or `named`, grown by `add`,
/// then checked field by field. Unset fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileCase {
    /// Free-text descriptor
    #[serde(default)]
    pub input: Option<String>,
    /// Form sequence
    #[serde(default)]
    pub forms: Option<Vec<String>>,
    /// `pronouns` field of a named set
    #[serde(default)]
    pub named: Option<Vec<String>>,
    /// Descriptors added after construction, in order
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub form_index: Option<usize>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub determiner: Option<String>,
    #[serde(default)]
    pub possessive: Option<String>,
    #[serde(default)]
    pub reflexive: Option<String>,
    #[serde(default)]
    pub to_string: Option<String>,
    #[serde(default)]
    pub to_url: Option<String>,
    #[serde(default)]
    pub len: Option<usize>,
    #[serde(default)]
    pub any: Option<bool>,
}

impl ProfileCase {
    /// The construction input; a case naming none is unrecognized input.
    pub fn pronoun_input(&self) -> PronounInput {
        if let Some(text) = &self.input {
            PronounInput::Text(text.clone())
        } else if let Some(forms) = &self.forms {
            PronounInput::FormSequence(forms.clone())
        } else if let Some(pronouns) = &self.named {
            PronounInput::NamedSet(NamedSet {
                pronouns: pronouns.clone(),
            })
        } else {
            PronounInput::Unrecognized
        }
    }
}

/// Parse fixture TOML.
pub fn parse_fixture(content: &str) -> SpecResult<SpecFixture> {
    toml::from_str(content).map_err(|e| {
        let line = e
            .span()
            .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1)
            .unwrap_or(0);
        SpecError::Parse {
            line,
            message: e.message().to_string(),
        }
    })
}
