//! # Storage Crate
//!
//! Interface boundary to the object store that holds every job artifact.
//!
//! ## Main Components
//!
//! - **store**: the `JsonStore` trait with filesystem and in-memory
//!   implementations; every write lands as a latest copy plus a dated
//!   retention copy
//! - **error**: error types for store access
//!
//! The real deployment keeps these artifacts in cloud object storage with
//! compressed blobs; transport and compression are that collaborator's
//! concern, so the trait speaks plain named JSON documents.

// Public modules
pub mod error;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use store::{DirStore, JsonStore, MemStore};
