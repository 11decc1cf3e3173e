//! The reference table of known pronoun sets.
//!
//! A [`Table`] is an ordered list of [`Row`]s. Order matters twice over: the
//! first matching row wins during resolution, and the first row whose subject
//! is `they` is the universal fallback. Tables are validated once on
//! construction and never change afterwards.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{TableError, TableResult};
use crate::matcher::find_first;
use crate::path::AbbreviationIndex;

/// Number of canonical grammatical slots at the front of every row:
/// subject, object, determiner, possessive, reflexive.
pub const CANONICAL_LEN: usize = 5;

/// Subject slug of the row every failed resolution falls back to.
pub const FALLBACK_SUBJECT: &str = "they";

static BUILTIN: Lazy<Table> = Lazy::new(|| {
    Table::from_json(include_str!("../resources/pronouns.json"))
        .expect("Invalid built-in pronoun table")
});

/// One pronoun set: five canonical forms followed by optional alias slugs.
///
/// Slugs are trimmed and lowercased on construction, so two rows built from
/// differently-cased input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    /// Create a row, normalizing every slug.
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            slugs
                .into_iter()
                .map(|slug| slug.as_ref().trim().to_lowercase())
                .collect(),
        )
    }

    /// All slugs, aliases included.
    pub fn slugs(&self) -> &[String] {
        &self.0
    }

    /// The slug at `position`, if the row is that long.
    pub fn slug(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The five grammatical forms, without alias columns.
    pub fn canonical(&self) -> &[String] {
        &self.0[..self.0.len().min(CANONICAL_LEN)]
    }

    /// Alternate spellings stored after the canonical forms.
    pub fn aliases(&self) -> &[String] {
        &self.0[self.0.len().min(CANONICAL_LEN)..]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical().join("/"))
    }
}

/// An immutable, validated, ordered collection of pronoun rows.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    fallback: usize,
    abbreviations: AbbreviationIndex,
}

impl Table {
    /// Validate `rows` and build the abbreviation index.
    pub fn new(rows: Vec<Row>) -> TableResult<Self> {
        let mut seen: HashMap<&Row, usize> = HashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() < CANONICAL_LEN {
                return Err(TableError::ShortRow {
                    row: idx,
                    len: row.len(),
                });
            }
            if let Some(position) = row.slugs().iter().position(|slug| slug.is_empty()) {
                return Err(TableError::EmptySlug { row: idx, position });
            }
            if let Some(&first) = seen.get(row) {
                return Err(TableError::DuplicateRow { first, second: idx });
            }
            seen.insert(row, idx);
        }

        let mut table = Self {
            rows,
            fallback: 0,
            abbreviations: AbbreviationIndex::default(),
        };
        table.fallback = find_first(&[FALLBACK_SUBJECT], &table)
            .and_then(|row| table.position(row))
            .ok_or(TableError::MissingFallback)?;
        table.abbreviations = AbbreviationIndex::build(&table);
        Ok(table)
    }

    /// Build a table from raw slug lists.
    pub fn from_slugs<R, I, S>(rows: R) -> TableResult<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(rows.into_iter().map(Row::new).collect())
    }

    /// Parse a JSON array of string arrays.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let rows: Vec<Vec<String>> = serde_json::from_str(json)?;
        Self::from_slugs(rows)
    }

    /// The table shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static Table {
        &BUILTIN
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `they` row used whenever resolution comes up empty.
    pub fn fallback(&self) -> &Row {
        &self.rows[self.fallback]
    }

    /// Shortest unambiguous path of every row, in table order.
    pub fn abbreviations(&self) -> &AbbreviationIndex {
        &self.abbreviations
    }

    /// Index of `row` within this table.
    ///
    /// Rows borrowed from the table are found by address; anything else is
    /// compared slug by slug.
    pub fn position(&self, row: &Row) -> Option<usize> {
        self.rows
            .iter()
            .position(|candidate| std::ptr::eq(candidate, row))
            .or_else(|| self.rows.iter().position(|candidate| candidate == row))
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
