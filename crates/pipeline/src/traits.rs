//! Core trait for the classification engine.
//!
//! This module defines the Accumulator trait that allows independent,
//! named classification rules to be run in a single pass over a record
//! set, each retaining its own accepted subset.

use catalog::RecordSet;
use serde_json::Value;

/// A named classification rule with private accumulation state.
///
/// The engine presents every `(guid, record)` pair to every accumulator
/// exactly once per run. Accumulators decide retention only; they never
/// mutate record content and never observe each other's decisions.
///
/// ## Design Note
/// - `evaluate` takes `&mut self`: each accumulator owns its accepted set
///   exclusively, so a single-threaded pass needs no synchronization
/// - `Send` allows rule evaluation to be spread across threads for one
///   record if a caller ever wants to; accumulation state still belongs to
///   exactly one rule
pub trait Accumulator: Send {
    /// Returns the name of this rule (keys the persisted result set)
    fn name(&self) -> &str;

    /// Evaluate one record and retain it if the rule's predicate accepts.
    ///
    /// # Arguments
    /// * `guid` - the record's globally-unique identifier
    /// * `record` - the record's raw JSON body
    ///
    /// # Errors
    /// Data-quality faults (a record the rule cannot evaluate at all)
    /// surface as [`catalog::CatalogError`]; policy exclusions are normal
    /// control flow and return `Ok(())` without retaining the record.
    fn evaluate(&mut self, guid: &str, record: &Value) -> catalog::Result<()>;

    /// The accepted set, in first-accepted order.
    ///
    /// Read only after all `evaluate` calls for the run have completed.
    fn results(&self) -> &RecordSet;
}
