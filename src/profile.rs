//! Pronoun profiles.
//!
//! A [`Pronouns`] profile is the resolved view of one person's pronouns: the
//! ordered sets they accept, whether any pronouns are fine, the five forms of
//! one chosen set, and example sentences for every set.

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::expand::{is_wildcard, resolve_segments};
use crate::matcher::rows_equal;
use crate::path::abbreviate;
use crate::sanitize::{resolve_input, PronounInput};
use crate::sentences::Examples;
use crate::table::{Row, Table};

/// Base of profile URLs.
pub const PRONOUN_IS: &str = "https://pronoun.is/";

/// The five grammatical forms of one pronoun set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Forms<'t> {
    pub subject: &'t str,
    pub object: &'t str,
    pub determiner: &'t str,
    pub possessive: &'t str,
    pub reflexive: &'t str,
}

impl<'t> Forms<'t> {
    pub fn from_row(row: &'t Row) -> Self {
        let slot = |idx| row.slug(idx).unwrap_or_default();
        Self {
            subject: slot(0),
            object: slot(1),
            determiner: slot(2),
            possessive: slot(3),
            reflexive: slot(4),
        }
    }

    pub fn sub(&self) -> &'t str {
        self.subject
    }

    pub fn obj(&self) -> &'t str {
        self.object
    }

    pub fn det(&self) -> &'t str {
        self.determiner
    }

    pub fn pos(&self) -> &'t str {
        self.possessive
    }

    /// Short alias for the reflexive form (`ref` is reserved in Rust).
    pub fn refl(&self) -> &'t str {
        self.reflexive
    }
}

/// A resolved selection of pronoun sets.
#[derive(Debug, Clone)]
pub struct Pronouns<'t> {
    table: &'t Table,
    config: Config,
    rows: Vec<&'t Row>,
    any: bool,
    form_index: usize,
    forms: Forms<'t>,
    examples: Examples,
}

impl<'t> Pronouns<'t> {
    /// Resolve `input` against `table`.
    ///
    /// Input that resolves to nothing yields an empty selection; forms and
    /// examples then describe the table's fallback row.
    pub fn new(input: impl Into<PronounInput>, table: &'t Table, config: Config) -> Self {
        let mut profile = Self {
            table,
            config,
            rows: Vec::new(),
            any: false,
            form_index: 0,
            forms: Forms::from_row(table.fallback()),
            examples: Examples::default(),
        };
        let rows = profile.process(&input.into());
        profile.extend(rows);
        profile.generate_forms(0);
        profile.generate_examples();
        profile
    }

    fn process(&mut self, input: &PronounInput) -> Vec<&'t Row> {
        self.any |= input.is_wildcard();

        let table = self.table;
        let logging = self.config.logging;
        match input {
            PronounInput::Text(text) => resolve_segments(text, table)
                .into_iter()
                .filter_map(|segment| {
                    if segment.row.is_none() && logging && !is_wildcard(segment.text) {
                        tracing::debug!(segment = segment.text, "no pronoun set matches segment");
                    }
                    segment.row
                })
                .collect(),
            PronounInput::Unrecognized => {
                if logging {
                    tracing::warn!("Unrecognized input. Defaulting to they/them.");
                }
                resolve_input(input, table)
            }
            _ => resolve_input(input, table),
        }
    }

    fn extend(&mut self, rows: Vec<&'t Row>) {
        for row in rows {
            if !self.rows.iter().any(|present| rows_equal(present, row)) {
                self.rows.push(row);
            }
        }
    }

    /// Pick the set whose forms are exposed.
    ///
    /// An index past the end of the selection selects the fallback row.
    pub fn generate_forms(&mut self, index: usize) {
        self.form_index = index;
        let row = self
            .rows
            .get(index)
            .copied()
            .unwrap_or_else(|| self.table.fallback());
        self.forms = Forms::from_row(row);
    }

    /// Rebuild example sentences for every set in the selection.
    pub fn generate_examples(&mut self) {
        self.examples = if self.rows.is_empty() {
            Examples::for_rows([self.table.fallback()])
        } else {
            Examples::for_rows(self.rows.iter().copied())
        };
    }

    /// Append the sets named by `input` that are not already selected.
    ///
    /// Examples are regenerated; the chosen form index is left alone.
    pub fn add(&mut self, input: impl Into<PronounInput>) {
        let rows = self.process(&input.into());
        self.extend(rows);
        self.generate_examples();
    }

    /// Selected sets, in the order they were first mentioned.
    pub fn rows(&self) -> &[&'t Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any pronouns are acceptable.
    pub fn any(&self) -> bool {
        self.any
    }

    pub fn forms(&self) -> Forms<'t> {
        self.forms
    }

    pub fn form_index(&self) -> usize {
        self.form_index
    }

    pub fn examples(&self) -> &Examples {
        &self.examples
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    fn short_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(move |row| abbreviate(self.table, row))
    }

    /// `https://pronoun.is/` link for the selection.
    pub fn to_url(&self) -> String {
        format!(
            "{}{}",
            PRONOUN_IS,
            self.short_paths().collect::<Vec<_>>().join("/:or/")
        )
    }

    /// Owned, serializable snapshot of the profile.
    pub fn view(&self) -> ProfileView {
        let forms = self.forms;
        ProfileView {
            pronouns: self.rows.iter().map(|row| row.slugs().to_vec()).collect(),
            any: self.any,
            subject: forms.subject.to_string(),
            object: forms.object.to_string(),
            determiner: forms.determiner.to_string(),
            possessive: forms.possessive.to_string(),
            reflexive: forms.reflexive.to_string(),
            sub: forms.sub().to_string(),
            obj: forms.obj().to_string(),
            det: forms.det().to_string(),
            pos: forms.pos().to_string(),
            refl: forms.refl().to_string(),
            examples: self.examples.plain.clone(),
            examples_html: self.examples.html.clone(),
            examples_md: self.examples.markdown.clone(),
        }
    }
}

impl fmt::Display for Pronouns<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sets: Vec<String> = self.short_paths().collect();
        if self.any {
            sets.push("any".to_string());
        }
        f.write_str(&sets.join(" or "))
    }
}

/// Serializable snapshot of a [`Pronouns`] profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub pronouns: Vec<Vec<String>>,
    pub any: bool,
    pub subject: String,
    pub object: String,
    pub determiner: String,
    pub possessive: String,
    pub reflexive: String,
    pub sub: String,
    pub obj: String,
    pub det: String,
    pub pos: String,
    #[serde(rename = "ref")]
    pub refl: String,
    pub examples: Vec<[String; 5]>,
    pub examples_html: Vec<[String; 5]>,
    pub examples_md: Vec<[String; 5]>,
}
