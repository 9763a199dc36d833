//! The single-pass classification engine.
//!
//! This module provides the loop that presents every record to every rule
//! and the policy applied when a rule reports a data-quality fault.

use crate::error::{PipelineError, Result};
use crate::traits::Accumulator;
use catalog::RecordSet;
use tracing;

/// What the run does when a rule cannot evaluate a record at all.
///
/// Policy exclusions are not affected; this only governs data-quality
/// faults such as a missing `first_create_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Fail the whole run on the first fault (default)
    #[default]
    Abort,
    /// Log a warning and leave the record out of that rule's results
    Skip,
}

/// Classify a record set with a fixed set of rules in a single pass.
///
/// ## Algorithm
/// 1. For each `(guid, record)` pair, in record-set iteration order:
///    a. Present the pair to every rule exactly once
///    b. Apply `policy` to any data-quality fault a rule reports
/// 2. Log per-rule acceptance counts
///
/// Rules never observe each other's decisions; the invocation order of
/// rules for a given record is unspecified and must not be relied upon.
/// The engine raises no errors of its own.
///
/// # Arguments
/// * `records` - the full record set (possibly empty)
/// * `rules` - the run's rule instances, each independently configured
/// * `policy` - fault handling decided by the driver
///
/// # Returns
/// * `Ok(())` - all records presented; read each rule's `results()`
/// * `Err` - a fault surfaced under [`FaultPolicy::Abort`], wrapped with
///   the offending rule's name
pub fn classify(
    records: &RecordSet,
    rules: &mut [&mut dyn Accumulator],
    policy: FaultPolicy,
) -> Result<()> {
    tracing::debug!(
        "Classifying {} records across {} rules",
        records.len(),
        rules.len()
    );

    for (guid, record) in records {
        for rule in rules.iter_mut() {
            if let Err(fault) = rule.evaluate(guid, record) {
                match policy {
                    FaultPolicy::Abort => {
                        return Err(PipelineError::Classification {
                            rule: rule.name().to_string(),
                            source: fault,
                        });
                    }
                    FaultPolicy::Skip => {
                        tracing::warn!(rule = rule.name(), %fault, "skipping unevaluable record");
                    }
                }
            }
        }
    }

    for rule in rules.iter() {
        tracing::debug!(
            "Rule {} accepted {} of {} records",
            rule.name(),
            rule.results().len(),
            records.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FeaturedRule, WhitelistCriteria, WhitelistRule};
    use serde_json::json;

    fn test_records() -> RecordSet {
        let mut records = RecordSet::new();
        records.insert(
            "featured@example.com".to_string(),
            json!({"is_featured": true}),
        );
        records.insert(
            "eligible@example.com".to_string(),
            json!({
                "current_version": {"files": [{"is_webextension": true}]},
                "ratings": {"average": 4.0},
                "first_create_date": "2023-01-01",
            }),
        );
        records
    }

    fn test_criteria() -> WhitelistCriteria {
        WhitelistCriteria::new(60, 3.0, "2024-06-01T00:00:00".parse().unwrap())
    }

    #[test]
    fn test_every_rule_sees_every_record() {
        let records = test_records();
        let mut featured = FeaturedRule::new();
        let mut whitelist = WhitelistRule::new(test_criteria());

        classify(
            &records,
            &mut [&mut featured, &mut whitelist],
            FaultPolicy::Abort,
        )
        .unwrap();

        assert_eq!(featured.results().len(), 1);
        assert!(featured.results().contains_key("featured@example.com"));
        assert_eq!(whitelist.results().len(), 1);
        assert!(whitelist.results().contains_key("eligible@example.com"));
    }

    #[test]
    fn test_empty_record_set_is_valid_input() {
        let records = RecordSet::new();
        let mut featured = FeaturedRule::new();

        classify(&records, &mut [&mut featured], FaultPolicy::Abort).unwrap();
        assert!(featured.results().is_empty());
    }

    #[test]
    fn test_abort_policy_names_the_faulting_rule() {
        let mut records = test_records();
        // Survives packaging and rating checks, then faults on the date
        records.insert(
            "undated@example.com".to_string(),
            json!({
                "current_version": {"files": [{"is_webextension": true}]},
                "ratings": {"average": 4.0},
            }),
        );

        let mut whitelist = WhitelistRule::new(test_criteria());
        let err = classify(&records, &mut [&mut whitelist], FaultPolicy::Abort).unwrap_err();

        match err {
            PipelineError::Classification { rule, .. } => assert_eq!(rule, "whitelist"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_policy_keeps_the_run_alive() {
        let mut records = test_records();
        records.insert(
            "undated@example.com".to_string(),
            json!({
                "current_version": {"files": [{"is_webextension": true}]},
                "ratings": {"average": 4.0},
            }),
        );

        let mut whitelist = WhitelistRule::new(test_criteria());
        classify(&records, &mut [&mut whitelist], FaultPolicy::Skip).unwrap();

        // The faulting record is left out; the rest of the run is intact
        let accepted: Vec<&String> = whitelist.results().keys().collect();
        assert_eq!(accepted, ["eligible@example.com"]);
    }
}
