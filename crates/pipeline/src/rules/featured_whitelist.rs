//! Rule retaining featured addons that are also whitelist-eligible.
//!
//! True predicate composition: the featured check short-circuits, then the
//! record must independently satisfy every whitelist criterion. The rule
//! holds its own [`WhitelistCriteria`] instance, so its thresholds may be
//! configured identically to or independently from the standalone
//! whitelist rule.

use crate::rules::whitelist::WhitelistCriteria;
use crate::traits::Accumulator;
use catalog::{RecordSet, RecordView};
use serde_json::Value;

/// Retains records that are featured AND satisfy [`WhitelistCriteria`].
///
/// Composition can only narrow acceptance: this rule's result set is
/// always a subset of both the featured and whitelist result sets (when
/// thresholds match).
#[derive(Debug)]
pub struct FeaturedWhitelistRule {
    criteria: WhitelistCriteria,
    results: RecordSet,
}

impl FeaturedWhitelistRule {
    pub fn new(criteria: WhitelistCriteria) -> Self {
        Self {
            criteria,
            results: RecordSet::new(),
        }
    }
}

impl Accumulator for FeaturedWhitelistRule {
    fn name(&self) -> &str {
        "featured_whitelist"
    }

    fn evaluate(&mut self, guid: &str, record: &Value) -> catalog::Result<()> {
        let view = RecordView::new(guid, record);

        // Unfeatured records never reach the whitelist criteria, so they
        // cannot trip the create-date fault here
        if !view.is_featured() {
            return Ok(());
        }

        if self.criteria.accepts(&view)? {
            self.results.insert(guid.to_string(), record.clone());
        }
        Ok(())
    }

    fn results(&self) -> &RecordSet {
        &self.results
    }
}
