//! Derived whitelist views over a record set.
//!
//! Downstream recommenders consume the whitelist as a bare GUID list
//! rather than full records. The derivation here is deliberately more
//! permissive than the classification rule: an addon qualifies if *any*
//! current-version file is a webextension, not just the first.

use crate::error::{CatalogError, Result};
use crate::types::{Guid, RecordSet, RecordView};

/// Derive the external whitelist GUID list from a whitelist record set.
///
/// Keeps every GUID whose record has at least one webextension-compatible
/// file, in record-set order.
///
/// # Errors
/// [`CatalogError::EmptyWhitelist`] when no record qualifies. An empty
/// whitelist is treated as a hard failure of the overall job, never as a
/// valid (if useless) output.
pub fn derive_external_whitelist(records: &RecordSet) -> Result<Vec<Guid>> {
    let eligible: Vec<Guid> = records
        .iter()
        .filter(|(guid, record)| RecordView::new(guid, record).has_webextension_file())
        .map(|(guid, _)| guid.clone())
        .collect();

    if eligible.is_empty() {
        return Err(CatalogError::EmptyWhitelist);
    }
    Ok(eligible)
}
