//! Free-text pronoun descriptors.
//!
//! A descriptor is one or more slash-separated sets joined by the word `or`:
//!
//! ```text
//! they/them or ze/hir
//! ╰───────╯    ╰────╯
//!  segment     segment
//! ```
//!
//! Each segment is matched against the table on its own; segments that match
//! nothing are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matcher::find_first;
use crate::table::{Row, Table};

static OR_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+or\s+").expect("Invalid separator regex"));

static WILDCARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\b(any(thing)?|all)\b|\*)").expect("Invalid wildcard regex")
});

/// One `or`-delimited piece of a descriptor and the row it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a, 't> {
    /// Segment text, trimmed.
    pub text: &'a str,
    /// First table row matching the segment's slugs, if any.
    pub row: Option<&'t Row>,
}

/// Split a descriptor into its non-empty `or`-delimited segments.
pub fn split_segments(text: &str) -> impl Iterator<Item = &str> + '_ {
    OR_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Split one segment into its slash-separated slugs, dropping empty ones.
pub fn split_slugs(segment: &str) -> Vec<&str> {
    segment
        .split('/')
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .collect()
}

/// Resolve every segment of `text`, keeping the ones that match nothing.
pub fn resolve_segments<'a, 't>(text: &'a str, table: &'t Table) -> Vec<Segment<'a, 't>> {
    split_segments(text)
        .map(|segment| {
            let slugs = split_slugs(segment);
            Segment {
                text: segment,
                row: if slugs.is_empty() {
                    None
                } else {
                    find_first(&slugs, table)
                },
            }
        })
        .collect()
}

/// Expand a descriptor into the rows it names, in the order they are
/// mentioned. Duplicates are kept.
pub fn expand_string<'t>(text: &str, table: &'t Table) -> Vec<&'t Row> {
    resolve_segments(text, table)
        .into_iter()
        .filter_map(|segment| segment.row)
        .collect()
}

/// Whether `text` says any pronouns are fine (`any`, `anything`, `all`, `*`).
pub fn is_wildcard(text: &str) -> bool {
    WILDCARD.is_match(text)
}
