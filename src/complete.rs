//! Shell-style completion of partially typed descriptors.
//!
//! The input is cut at its last whitespace character into a settled `rest`
//! and the word being typed. Candidates for that word are rendered back onto
//! `rest` in their short form:
//!
//! ```text
//! she/her or th
//! ╰─────────╯╰╯
//!    rest    last  ->  ["she/her or they", "she/her or thon"]
//! ```

use crate::config::Config;
use crate::expand::expand_string;
use crate::matcher::{rows_equal, slug_starts_with, table_front_filter};
use crate::path::abbreviate;
use crate::table::{Row, Table};

/// The literal joining word, offered alongside table rows.
pub const OR: &str = "or";

/// A single completion candidate before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<'t> {
    /// The `or` keyword.
    Or,
    /// A pronoun set from the table.
    Set(&'t Row),
}

/// Complete `raw` against the built-in table.
pub fn complete(raw: &str) -> Vec<String> {
    complete_with(raw, Table::builtin(), &Config::default())
}

/// Complete `raw` against `table`.
pub fn complete_with(raw: &str, table: &Table, config: &Config) -> Vec<String> {
    let (rest, last) = split_input(raw);
    let found = candidates(&rest, last, table);

    if config.logging && found.is_empty() {
        tracing::info!(input = raw, "No matches for {} found.", raw);
    }

    found
        .into_iter()
        .map(|candidate| match candidate {
            Completion::Or => format!("{}{}", rest, OR),
            Completion::Set(row) => format!("{}{}", rest, abbreviate(table, row)),
        })
        .collect()
}

/// Unrendered candidates for the word `last` following `rest`.
///
/// Sets already named in `rest` are never offered again.
pub fn candidates<'t>(rest: &str, last: &str, table: &'t Table) -> Vec<Completion<'t>> {
    let mut matches = Vec::new();

    if last.is_empty() {
        if !ends_with_or(rest) {
            matches.push(Completion::Or);
        }
        matches.extend(table.iter().map(Completion::Set));
    } else {
        let (parts, end) = match last.rsplit_once('/') {
            Some((head, end)) => (head.split('/').collect::<Vec<_>>(), end),
            None => (Vec::new(), last),
        };
        if parts.is_empty() && slug_starts_with(OR, end) {
            matches.push(Completion::Or);
        }
        matches.extend(
            table_front_filter(&parts, table)
                .into_iter()
                .filter(|row| {
                    row.slug(parts.len())
                        .map_or(false, |slug| slug_starts_with(slug, end))
                })
                .map(Completion::Set),
        );
    }

    let selected = expand_string(rest, table);
    matches.retain(|candidate| match candidate {
        Completion::Or => true,
        Completion::Set(row) => !selected.iter().any(|picked| rows_equal(picked, row)),
    });
    matches
}

/// Cut `raw` after its last whitespace character.
///
/// The head has its whitespace runs collapsed to single spaces.
pub fn split_input(raw: &str) -> (String, &str) {
    match raw.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, c)) => {
            let cut = idx + c.len_utf8();
            (collapse_whitespace(&raw[..cut]), &raw[cut..])
        }
        None => (String::new(), raw),
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn ends_with_or(rest: &str) -> bool {
    rest.split_whitespace()
        .last()
        .map_or(false, |token| token.eq_ignore_ascii_case(OR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        assert_eq!(split_input("she/her or th"), ("she/her or ".to_string(), "th"));
        assert_eq!(split_input("sh"), (String::new(), "sh"));
        assert_eq!(split_input("she \t or\n"), ("she or ".to_string(), ""));
    }

    #[test]
    fn test_completes_subject_prefix() {
        assert_eq!(complete("sh"), vec!["she", "shi"]);
        assert_eq!(complete("th"), vec!["they", "thon"]);
        assert_eq!(complete("E"), vec!["e", "ey"]);
    }

    #[test]
    fn test_completes_later_slots() {
        assert_eq!(complete("ze/"), vec!["ze/hir", "ze/zir", "ze/zem", "ze/mer"]);
        assert_eq!(complete("ze/z"), vec!["ze/zir", "ze/zem"]);
        assert_eq!(complete("vi/vim/vi"), vec!["vi/vim/vir", "vi/vim/vim"]);
    }

    #[test]
    fn test_offers_or_keyword() {
        assert_eq!(complete("o"), vec!["or"]);
        assert_eq!(complete("OR"), vec!["or"]);
        assert_eq!(complete("she o"), vec!["she or"]);
    }

    #[test]
    fn test_empty_word_lists_everything() {
        let all = complete("");
        assert_eq!(all.len(), Table::builtin().len() + 1);
        assert_eq!(all[0], "or");
        assert_eq!(all[1], "they");
    }

    #[test]
    fn test_no_or_after_or() {
        let after_or = complete("she or ");
        assert!(!after_or.iter().any(|c| c == "she or or"));
        assert_eq!(after_or[0], "she or they");

        let shouting = complete("she OR ");
        assert_eq!(shouting[0], "she OR they");
    }

    #[test]
    fn test_excludes_sets_already_present() {
        let completions = complete("she/her or th");
        assert_eq!(completions, vec!["she/her or they", "she/her or thon"]);

        assert_eq!(complete("she or sh"), vec!["she or shi"]);

        let after_she = complete("she or ");
        assert_eq!(after_she.len(), Table::builtin().len() - 1);
        assert!(!after_she.iter().any(|c| c == "she or she"));
    }

    #[test]
    fn test_collapses_whitespace_in_rest() {
        assert_eq!(complete("she  \tor   t"), vec!["she or they", "she or thon"]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(complete("xyz").is_empty());
        assert!(complete("she/her/her/hers/herself/").is_empty());
        assert!(complete_with("xyz", Table::builtin(), &Config::verbose()).is_empty());
    }

    #[test]
    fn test_candidates_are_unrendered_rows() {
        let table = Table::builtin();
        let found = candidates("", "hu", table);
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], Completion::Set(row) if row.slug(0) == Some("hu")));
    }
}
