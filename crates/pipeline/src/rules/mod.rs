//! Rule implementations for the classification engine.
//!
//! This module contains the closed set of concrete accumulators that the
//! whitelist transformer composes.

pub mod featured;
pub mod featured_whitelist;
pub mod whitelist;

// Re-export for convenience
pub use featured::FeaturedRule;
pub use featured_whitelist::FeaturedWhitelistRule;
pub use whitelist::{WhitelistCriteria, WhitelistRule, PIONEER_GUID};
