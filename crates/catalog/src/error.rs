//! Error types for the catalog crate.
//!
//! The catalog is loaded from an uncurated external dump, so most field
//! access degrades to a default instead of failing. The exceptions are the
//! data-quality faults below, which callers must handle explicitly.

use thiserror::Error;

/// Errors that can occur while reading catalog records
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record is missing its `first_create_date` field entirely
    #[error("record {guid} has no first_create_date")]
    MissingCreateDate { guid: String },

    /// A record carries a `first_create_date` we cannot parse
    #[error("record {guid} has unparseable first_create_date {value:?}")]
    InvalidCreateDate { guid: String, value: String },

    /// The derived external whitelist came out empty
    ///
    /// An empty whitelist is never valid: downstream recommenders would
    /// silently recommend nothing. This is a hard failure of the job.
    #[error("derived whitelist contains no eligible addons")]
    EmptyWhitelist,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
