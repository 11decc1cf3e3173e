//! Shortest unambiguous paths.
//!
//! The short form of a pronoun set is the smallest prefix of its slugs that no
//! other row in the table shares: `she/her/her/hers/herself` becomes `she`,
//! while the several `ze` rows need a second slug (`ze/hir`, `ze/zir`, ...).
//! These paths drive string and URL rendering as well as autocompletion.

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::matcher::table_front_filter;
use crate::table::{Row, Table};

/// Minimal prefix of `row` that the front filter resolves to exactly one row.
///
/// Alias columns are never part of a path; when even the five canonical
/// slugs are shared the full canonical form is returned.
pub fn shortest_unambiguous_path<'r>(table: &Table, row: &'r Row) -> &'r [String] {
    let canonical = row.canonical();
    (1..=canonical.len())
        .map(|len| &canonical[..len])
        .find(|prefix| table_front_filter(*prefix, table).len() == 1)
        .unwrap_or(canonical)
}

/// Shortest unambiguous path for every row of a table, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationIndex {
    paths: Vec<Vec<String>>,
    /// Slash-joined canonical form of each row, for display.
    full: Vec<String>,
}

impl AbbreviationIndex {
    /// Compute the path of every row in `table`.
    pub fn build(table: &Table) -> Self {
        Self {
            paths: table
                .iter()
                .map(|row| shortest_unambiguous_path(table, row).to_vec())
                .collect(),
            full: table.iter().map(ToString::to_string).collect(),
        }
    }

    /// Path of the row at `index`.
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.paths.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.paths.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Two aligned columns, short path then full form:
///
/// ```text
/// they    they/them/their/theirs/themself
/// ze/hir  ze/hir/hir/hirs/hirself
/// ```
impl fmt::Display for AbbreviationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let paths: Vec<String> = self.iter().map(|path| path.join("/")).collect();
        let column = paths
            .iter()
            .map(|path| UnicodeWidthStr::width(path.as_str()))
            .max()
            .unwrap_or(0)
            + SPACE_PADDING;

        for (idx, (path, full)) in paths.iter().zip(&self.full).enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            f.write_str(path)?;
            for _ in UnicodeWidthStr::width(path.as_str())..column {
                f.write_char(' ')?;
            }
            f.write_str(full)?;
        }
        Ok(())
    }
}

/// Slash-joined short form of `row`, reusing the table's precomputed index
/// when the row belongs to it.
pub fn abbreviate(table: &Table, row: &Row) -> String {
    table
        .position(row)
        .and_then(|idx| table.abbreviations().get(idx))
        .unwrap_or_else(|| shortest_unambiguous_path(table, row))
        .join("/")
}
