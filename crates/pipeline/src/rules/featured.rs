//! Rule retaining editorially featured addons.
//!
//! The editorial flag is the only criterion; rating, age, and packaging
//! are irrelevant here.

use crate::traits::Accumulator;
use catalog::{RecordSet, RecordView};
use serde_json::Value;

/// Retains records whose `is_featured` attribute is present and true.
///
/// An absent attribute reads as false, so unflagged records are rejected
/// silently.
#[derive(Debug, Default)]
pub struct FeaturedRule {
    results: RecordSet,
}

impl FeaturedRule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for FeaturedRule {
    fn name(&self) -> &str {
        "featured"
    }

    fn evaluate(&mut self, guid: &str, record: &Value) -> catalog::Result<()> {
        if RecordView::new(guid, record).is_featured() {
            self.results.insert(guid.to_string(), record.clone());
        }
        Ok(())
    }

    fn results(&self) -> &RecordSet {
        &self.results
    }
}
