//! Laws that hold for every row of the built-in table.

use crate::{
    complete, expand_string, pronouns, rows_equal, shortest_unambiguous_path, table_front_filter,
    table_lookup, Table,
};

#[test]
fn test_short_paths_round_trip() {
    let table = Table::builtin();
    for row in table {
        let path = shortest_unambiguous_path(table, row);
        assert!(std::ptr::eq(table_lookup(path, table), row));
        assert_eq!(table_front_filter(path, table), vec![row]);

        let rendered = path.join("/");
        let expanded = expand_string(&rendered, table);
        assert_eq!(expanded.len(), 1);
        assert!(rows_equal(expanded[0], row), "{} did not round trip", rendered);
    }
}

#[test]
fn test_profile_string_round_trips() {
    let original = pronouns("vi/vim/vim or fae or xey/xem/xeir", false);
    let reparsed = pronouns(original.to_string(), false);
    assert_eq!(reparsed.rows(), original.rows());
}

#[test]
fn test_addition_is_idempotent() {
    for input in ["she", "ze/hir or they", "blorp", "any"] {
        let mut once = pronouns("he", false);
        once.add(input);

        let mut twice = pronouns("he", false);
        twice.add(input);
        twice.add(input);

        assert_eq!(once.rows(), twice.rows(), "adding {:?} twice", input);
        assert_eq!(once.any(), twice.any());
        assert_eq!(once.examples(), twice.examples());
    }
}

#[test]
fn test_or_preserves_mention_order() {
    let table = Table::builtin();
    let descriptors = ["she", "he", "ze/zem", "vi/ver", "kit"];
    for a in descriptors {
        for b in descriptors {
            if a == b {
                continue;
            }
            let joined = expand_string(&format!("{} or {}", a, b), table);
            let separately = [expand_string(a, table), expand_string(b, table)].concat();
            assert_eq!(joined, separately);
        }
    }
}

#[test]
fn test_completions_resolve_to_table_rows() {
    let table = Table::builtin();
    for prefix in ["s", "ze/", "x", "vi/vim/", "t"] {
        for candidate in complete(prefix) {
            let rows = expand_string(&candidate, table);
            assert_eq!(rows.len(), 1, "{} resolved to {:?}", candidate, rows);
        }
    }
}

#[test]
fn test_completion_never_repeats_selected_sets() {
    let table = Table::builtin();
    for input in ["she/her or th", "she or s", "ze/hir or ze/", "they or "] {
        let (rest, _) = crate::complete::split_input(input);
        let selected = expand_string(&rest, table);
        for candidate in complete(input) {
            let suggested = candidate.strip_prefix(rest.as_str()).unwrap();
            for row in expand_string(suggested, table) {
                assert!(
                    !selected.iter().any(|picked| rows_equal(picked, row)),
                    "{:?} re-suggested {}",
                    input,
                    candidate
                );
            }
        }
    }
}
