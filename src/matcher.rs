//! Primitive comparisons between user slugs and table rows.
//!
//! Everything here is case-insensitive. Table rows are already lowercase, but
//! query slugs come straight from user input.

use crate::table::{Row, Table};

fn lower(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Case-insensitive slug equality.
pub fn slug_eq(a: &str, b: &str) -> bool {
    lower(a).eq(lower(b))
}

/// Case-insensitive `slug.starts_with(prefix)`.
pub fn slug_starts_with(slug: &str, prefix: &str) -> bool {
    let mut chars = lower(slug);
    lower(prefix).all(|c| chars.next() == Some(c))
}

/// True iff both rows have the same length and equal slugs at every position.
pub fn rows_equal(a: &Row, b: &Row) -> bool {
    a.len() == b.len()
        && a
            .slugs()
            .iter()
            .zip(b.slugs())
            .all(|(left, right)| slug_eq(left, right))
}

/// True iff the leading slugs of `row` equal `parts` in order.
pub fn row_starts_with<S: AsRef<str>>(row: &Row, parts: &[S]) -> bool {
    row.len() >= parts.len()
        && parts
            .iter()
            .zip(row.slugs())
            .all(|(part, slug)| slug_eq(part.as_ref(), slug))
}

/// Every row whose leading slugs equal `parts`, in table order.
pub fn table_front_filter<'t, S: AsRef<str>>(parts: &[S], table: &'t Table) -> Vec<&'t Row> {
    table
        .iter()
        .filter(|row| row_starts_with(row, parts))
        .collect()
}

/// The first row whose leading slugs equal `parts`.
pub fn find_first<'t, S: AsRef<str>>(parts: &[S], table: &'t Table) -> Option<&'t Row> {
    table.iter().find(|row| row_starts_with(row, parts))
}

/// Like [`find_first`], but lands on the table's fallback row instead of
/// failing.
pub fn table_lookup<'t, S: AsRef<str>>(keys: &[S], table: &'t Table) -> &'t Row {
    find_first(keys, table).unwrap_or_else(|| table.fallback())
}
