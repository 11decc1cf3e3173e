//! Table-driven resolution of grammatical pronoun sets.
//!
//! Free-text descriptors like `"they/them or ze/hir"` and structured input
//! like `["she", "her"]` both resolve against an ordered reference
//! [`Table`] of known pronoun sets. On top of that sit shortest-path
//! rendering, shell-style autocompletion and [`Pronouns`] profiles with
//! example sentences.
//!
//! ## Usage
//!
//! ```
//! use pronoun_sets::{complete, pronouns};
//!
//! let profile = pronouns("she or ze/hir", false);
//! assert_eq!(profile.forms().subject, "she");
//! assert_eq!(profile.to_string(), "she or ze/hir");
//! assert_eq!(profile.to_url(), "https://pronoun.is/she/:or/ze/hir");
//!
//! assert_eq!(complete("she or th"), vec!["she or they", "she or thon"]);
//! ```
//!
//! ## Modules
//!
//! - [`table`] - Rows, the validated table, and the built-in asset
//! - [`matcher`] - Case-insensitive row comparison and filtering
//! - [`expand`] - Free-text descriptor parsing
//! - [`sanitize`] - Structured input and the [`PronounInput`] boundary type
//! - [`path`] - Shortest unambiguous paths and the abbreviation index
//! - [`complete`] - Autocompletion
//! - [`profile`] - [`Pronouns`] profiles
//! - [`sentences`] - Example sentence rendering
//! - [`config`] - Per-profile and per-call [`Config`]
//! - [`errors`] - Table validation errors

pub mod complete;
pub mod config;
mod display;
pub mod errors;
pub mod expand;
pub mod matcher;
pub mod path;
pub mod profile;
pub mod sanitize;
pub mod sentences;
pub mod table;

pub use complete::{complete, complete_with, Completion};
pub use config::Config;
pub use display::TableDisplay;
pub use errors::{TableError, TableResult};
pub use expand::{expand_string, is_wildcard, resolve_segments, Segment};
pub use matcher::{rows_equal, table_front_filter, table_lookup};
pub use path::{abbreviate, shortest_unambiguous_path, AbbreviationIndex};
pub use profile::{Forms, ProfileView, Pronouns, PRONOUN_IS};
pub use sanitize::{resolve_input, sanitize_set, NamedSet, PronounInput};
pub use sentences::{capitalize, Emphasis, Examples};
pub use table::{Row, Table, CANONICAL_LEN, FALLBACK_SUBJECT};

/// Build a profile against the built-in table.
///
/// `logging` enables diagnostics for this profile only.
pub fn pronouns(input: impl Into<PronounInput>, logging: bool) -> Pronouns<'static> {
    Pronouns::new(
        input,
        Table::builtin(),
        Config::new().with_logging(logging),
    )
}
