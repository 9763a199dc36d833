//! The whitelist transformer: driver for the classification engine.
//!
//! Owns the fixed map of named rule instances, runs the engine exactly
//! once per record set, and exposes named accessors to each rule's result
//! set. Implements no predicate itself; pure composition and wiring.

use crate::engine::{classify, FaultPolicy};
use crate::error::Result;
use crate::rules::{FeaturedRule, FeaturedWhitelistRule, WhitelistCriteria, WhitelistRule};
use crate::traits::Accumulator;
use catalog::RecordSet;
use chrono::NaiveDateTime;

/// Configuration for one transformer run.
///
/// Passed in explicitly at construction; there is no module-level default
/// state. The featured-whitelist thresholds fall back to the main ones
/// when unset.
#[derive(Debug, Clone, Copy)]
pub struct TransformConfig {
    /// Inclusive lower rating bound for whitelist eligibility
    pub min_rating: f64,
    /// Minimum addon age in days for whitelist eligibility
    pub min_age_days: i64,
    /// Override rating bound for the featured-whitelist rule
    pub featured_min_rating: Option<f64>,
    /// Override age threshold for the featured-whitelist rule
    pub featured_min_age_days: Option<i64>,
    /// What to do when a rule cannot evaluate a record
    pub fault_policy: FaultPolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            min_rating: 3.0,
            min_age_days: 60,
            featured_min_rating: None,
            featured_min_age_days: None,
            fault_policy: FaultPolicy::Abort,
        }
    }
}

/// Filters the raw addon catalog into the three recommendation subsets:
/// `whitelist`, `featured`, and `featured_whitelist`.
///
/// ## Usage
/// ```ignore
/// let mut transformer = WhitelistTransformer::new(TransformConfig::default(), today);
/// transformer.transform(&records)?;
///
/// store.write_json("whitelist_addons_database", transformer.whitelist(), date)?;
/// ```
pub struct WhitelistTransformer {
    whitelist: WhitelistRule,
    featured: FeaturedRule,
    featured_whitelist: FeaturedWhitelistRule,
    fault_policy: FaultPolicy,
}

impl WhitelistTransformer {
    /// Build the three rule instances for one run.
    ///
    /// # Arguments
    /// * `config` - thresholds and fault policy
    /// * `today` - the run's reference date-time, captured once by the
    ///   caller and stable for the whole run
    pub fn new(config: TransformConfig, today: NaiveDateTime) -> Self {
        let criteria = WhitelistCriteria::new(config.min_age_days, config.min_rating, today);
        let featured_criteria = WhitelistCriteria::new(
            config.featured_min_age_days.unwrap_or(config.min_age_days),
            config.featured_min_rating.unwrap_or(config.min_rating),
            today,
        );

        Self {
            whitelist: WhitelistRule::new(criteria),
            featured: FeaturedRule::new(),
            featured_whitelist: FeaturedWhitelistRule::new(featured_criteria),
            fault_policy: config.fault_policy,
        }
    }

    /// Run the classification engine once over the full record set.
    pub fn transform(&mut self, records: &RecordSet) -> Result<()> {
        let mut rules: [&mut dyn Accumulator; 3] = [
            &mut self.whitelist,
            &mut self.featured,
            &mut self.featured_whitelist,
        ];
        classify(records, &mut rules, self.fault_policy)
    }

    /// Addons eligible for recommendation.
    pub fn whitelist(&self) -> &RecordSet {
        self.whitelist.results()
    }

    /// Editorially featured addons.
    pub fn featured(&self) -> &RecordSet {
        self.featured.results()
    }

    /// Featured addons that are also whitelist-eligible.
    pub fn featured_whitelist(&self) -> &RecordSet {
        self.featured_whitelist.results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed_today() -> NaiveDateTime {
        "2024-06-01T00:00:00".parse().unwrap()
    }

    fn test_records() -> RecordSet {
        let mut records = RecordSet::new();
        records.insert(
            "featured-eligible@example.com".to_string(),
            json!({
                "is_featured": true,
                "current_version": {"files": [{"is_webextension": true}]},
                "ratings": {"average": 4.2},
                "first_create_date": "2023-05-01",
            }),
        );
        records.insert(
            "featured-only@example.com".to_string(),
            json!({"is_featured": true}),
        );
        records.insert(
            "eligible-only@example.com".to_string(),
            json!({
                "current_version": {"files": [{"is_webextension": true}]},
                "ratings": {"average": 3.4},
                "first_create_date": "2022-11-20",
            }),
        );
        records
    }

    #[test]
    fn test_named_accessors_expose_each_result_set() {
        let mut transformer = WhitelistTransformer::new(TransformConfig::default(), fixed_today());
        transformer.transform(&test_records()).unwrap();

        assert_eq!(
            transformer.whitelist().keys().collect::<Vec<_>>(),
            ["featured-eligible@example.com", "eligible-only@example.com"]
        );
        assert_eq!(
            transformer.featured().keys().collect::<Vec<_>>(),
            ["featured-eligible@example.com", "featured-only@example.com"]
        );
        assert_eq!(
            transformer.featured_whitelist().keys().collect::<Vec<_>>(),
            ["featured-eligible@example.com"]
        );
    }

    #[test]
    fn test_composition_only_narrows() {
        let mut transformer = WhitelistTransformer::new(TransformConfig::default(), fixed_today());
        transformer.transform(&test_records()).unwrap();

        let narrowest = transformer.featured_whitelist().len();
        assert!(narrowest <= transformer.featured().len());
        assert!(narrowest <= transformer.whitelist().len());
    }

    #[test]
    fn test_independent_featured_thresholds() {
        let config = TransformConfig {
            // Stricter rating bound for the featured subset only
            featured_min_rating: Some(4.5),
            ..TransformConfig::default()
        };
        let mut transformer = WhitelistTransformer::new(config, fixed_today());
        transformer.transform(&test_records()).unwrap();

        // 4.2 clears the main bound but not the featured one
        assert!(transformer
            .whitelist()
            .contains_key("featured-eligible@example.com"));
        assert!(transformer.featured_whitelist().is_empty());
    }
}
