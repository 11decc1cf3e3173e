//! Error types for the fixture harness.

use pronoun_sets::TableError;
use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file is not valid fixture TOML.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A fixture file could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture's inline table failed validation.
    #[error("invalid fixture table: {0}")]
    Table(#[from] TableError),
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
