//! Rule retaining addons eligible for recommendation.
//!
//! Eligibility combines packaging, rating, and age criteria. The criteria
//! live in their own evaluator struct so the featured-whitelist rule can
//! delegate to the identical predicate without inheriting accumulation
//! state.

use crate::traits::Accumulator;
use catalog::{RecordSet, RecordView};
use chrono::{Duration, NaiveDateTime};
use serde_json::Value;

/// Firefox Pioneer is permanently excluded from recommendation,
/// independent of every other criterion.
pub const PIONEER_GUID: &str = "pioneer-opt-in@mozilla.org";

/// The whitelist eligibility predicate, fixed at construction time.
///
/// ## Criteria (checked in order, first failure rejects)
/// 1. Not the Pioneer opt-in addon
/// 2. Current version has at least one published file
/// 3. The *first* file is a webextension (legacy packaging in the first
///    slot disqualifies the addon outright)
/// 4. Average rating at or above `min_rating`
/// 5. Created strictly before `today - min_age` days
///
/// The age cutoff is computed once from the run's reference date, not
/// re-evaluated per record.
#[derive(Debug, Clone, Copy)]
pub struct WhitelistCriteria {
    min_rating: f64,
    latest_create_date: NaiveDateTime,
}

impl WhitelistCriteria {
    /// Create the predicate for one run.
    ///
    /// # Arguments
    /// * `min_age_days` - minimum addon age in days (typically 60)
    /// * `min_rating` - inclusive lower rating bound (typically 3.0)
    /// * `today` - the run's reference date-time, injected so it is stable
    ///   for the whole run and fixable in tests
    pub fn new(min_age_days: i64, min_rating: f64, today: NaiveDateTime) -> Self {
        Self {
            min_rating,
            latest_create_date: today - Duration::days(min_age_days),
        }
    }

    /// Decide whether a record is whitelist-eligible.
    ///
    /// # Errors
    /// Only the create-date check can fault: a record that survives the
    /// earlier criteria but lacks a parseable `first_create_date` is a
    /// data-quality defect, not a rejection.
    pub fn accepts(&self, view: &RecordView<'_>) -> catalog::Result<bool> {
        if view.guid() == PIONEER_GUID {
            return Ok(false);
        }

        // Some addons genuinely have no files in their latest version.
        if view.current_version_files().is_empty() {
            return Ok(false);
        }

        if !view.first_file_is_webextension() {
            return Ok(false);
        }

        if view.average_rating() < self.min_rating {
            return Ok(false);
        }

        let created = view.first_create_date()?;
        Ok(created < self.latest_create_date)
    }
}

/// Retains records satisfying [`WhitelistCriteria`].
#[derive(Debug)]
pub struct WhitelistRule {
    criteria: WhitelistCriteria,
    results: RecordSet,
}

impl WhitelistRule {
    pub fn new(criteria: WhitelistCriteria) -> Self {
        Self {
            criteria,
            results: RecordSet::new(),
        }
    }
}

impl Accumulator for WhitelistRule {
    fn name(&self) -> &str {
        "whitelist"
    }

    fn evaluate(&mut self, guid: &str, record: &Value) -> catalog::Result<()> {
        if self.criteria.accepts(&RecordView::new(guid, record))? {
            self.results.insert(guid.to_string(), record.clone());
        }
        Ok(())
    }

    fn results(&self) -> &RecordSet {
        &self.results
    }
}
