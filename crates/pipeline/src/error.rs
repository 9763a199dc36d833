//! Error types for the pipeline crate.

use catalog::CatalogError;
use thiserror::Error;

/// Errors raised by the classification engine and the supplemental jobs
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A rule hit a data-quality fault while evaluating a record
    ///
    /// Carries the rule name so run-level logs identify which accumulator
    /// tripped; the underlying [`CatalogError`] names the offending guid.
    #[error("rule {rule} hit a data-quality fault")]
    Classification {
        rule: String,
        #[source]
        source: CatalogError,
    },

    /// The curated editorial list parsed to zero GUIDs
    #[error("curated editorial list came out empty")]
    EmptyCuratedList,

    /// The curated editorial list is suspiciously short
    #[error("only obtained {count} editorial reviewed addons (minimum {minimum})")]
    ShortCuratedList { count: usize, minimum: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
