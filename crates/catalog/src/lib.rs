//! # Catalog Crate
//!
//! Domain model for the raw addon-catalog dump.
//!
//! ## Main Components
//!
//! - **types**: `Guid`, `RecordSet`, and the `RecordView` typed accessors
//!   over raw record JSON
//! - **dates**: timezone-naive parsing of catalog timestamp strings
//! - **whitelist**: derived GUID-list views with the empty-whitelist fault
//! - **error**: error types for catalog access
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{RecordSet, RecordView};
//!
//! let records: RecordSet = serde_json::from_str(&dump)?;
//! for (guid, record) in &records {
//!     let view = RecordView::new(guid, record);
//!     if view.is_featured() {
//!         println!("{} is featured, rated {}", guid, view.average_rating());
//!     }
//! }
//! ```
//!
//! Record bodies stay raw `serde_json::Value` end to end: the output
//! artifacts must contain each accepted record's original JSON structure
//! unmodified, so nothing is ever deserialized into a lossy typed form.

// Public modules
pub mod dates;
pub mod error;
pub mod types;
pub mod whitelist;

// Re-export commonly used types for convenience
pub use dates::parse_naive_datetime;
pub use error::{CatalogError, Result};
pub use types::{Guid, RecordSet, RecordView};
pub use whitelist::derive_external_whitelist;
