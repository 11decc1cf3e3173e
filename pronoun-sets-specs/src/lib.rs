//! Fixture-driven conformance testing for pronoun-sets.
//!
//! Cases are declared in TOML files under `fixtures/`. A fixture may carry
//! its own `table`; otherwise the built-in table is used.
//!
//! ```toml
//! title = "Expansion"
//!
//! [[expand]]
//! input = "she or ze/hir"
//! expect = [["she", "her", "her", "hers", "herself"], ["ze", "hir", "hir", "hirs", "hirself"]]
//!
//! [[complete]]
//! input = "sh"
//! expect = ["she", "shi"]
//! ```
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture file types and parsing
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs fixture cases and tallies results
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod fixture;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use fixture::{
    parse_fixture, CompleteCase, ExpandCase, PathCase, ProfileCase, SpecFixture,
};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_all, run_fixture, CaseOutcome, HarnessResult};
