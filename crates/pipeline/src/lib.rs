//! Pipeline for classifying and aggregating addon catalog data.
//!
//! This crate provides:
//! - Accumulator trait and rule implementations for record classification
//! - The single-pass classification engine and its fault policy
//! - WhitelistTransformer driving one classification run
//! - Install-count ranking and curated-list parsing for the sibling jobs
//!
//! ## Architecture
//! One run of the whitelist job is a single pass:
//! 1. The driver builds the three named rules from an explicit config
//! 2. The engine presents every record to every rule exactly once
//! 3. Each rule accumulates its accepted subset in first-accepted order
//! 4. The driver exposes each result set for independent persistence
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{TransformConfig, WhitelistTransformer};
//!
//! let mut transformer = WhitelistTransformer::new(TransformConfig::default(), today);
//! transformer.transform(&records)?;
//!
//! let whitelist = transformer.whitelist();
//! let featured = transformer.featured();
//! ```

pub mod curated;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod rules;
pub mod traits;
pub mod transformer;

// Re-export main types
pub use curated::{parse_editorial_guids, MIN_CURATED_GUIDS};
pub use engine::{classify, FaultPolicy};
pub use error::{PipelineError, Result};
pub use ranking::{rank_install_counts, InstallRow};
pub use traits::Accumulator;
pub use transformer::{TransformConfig, WhitelistTransformer};
