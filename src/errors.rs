//! Error types for loading pronoun tables.
//!
//! Resolution itself never fails: unknown input falls back to the `they`
//! row. Only building a [`Table`](crate::Table) from external data can go wrong.

use thiserror::Error;

/// Errors that can occur while loading or validating a pronoun table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The asset is not a JSON array of string arrays.
    #[error("failed to parse pronoun table: {0}")]
    Json(#[from] serde_json::Error),

    /// A row does not carry all five grammatical forms.
    #[error("row {row} has {len} slugs, expected at least 5")]
    ShortRow { row: usize, len: usize },

    /// A slug is empty after trimming.
    #[error("row {row} has an empty slug at position {position}")]
    EmptySlug { row: usize, position: usize },

    /// Two rows carry the same slugs in the same order.
    #[error("row {second} duplicates row {first}")]
    DuplicateRow { first: usize, second: usize },

    /// No row has `they` as its subject, so there is nothing to fall back to.
    #[error("pronoun table has no `they` row to fall back to")]
    MissingFallback,
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
