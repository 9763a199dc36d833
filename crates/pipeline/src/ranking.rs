//! Per-addon install-count ranking.
//!
//! The warehouse query that produces the rows is an external collaborator;
//! this module consumes its materialized result set and produces the
//! GUID-keyed install-count artifact. Aggregation carries no ordering
//! contract, so it runs data-parallel and the output is ordered
//! deterministically afterwards.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One materialized row of the install-count query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallRow {
    pub addon_guid: String,
    pub install_count: u64,
}

/// Aggregate query rows into the install-count ranking.
///
/// ## Algorithm
/// 1. Sum counts per GUID in parallel (a GUID may appear on several rows
///    when the query result is paginated)
/// 2. Order by descending install count, ties by GUID, so the artifact is
///    deterministic for a given row set
pub fn rank_install_counts(rows: &[InstallRow]) -> IndexMap<String, u64> {
    let totals: HashMap<String, u64> = rows
        .par_iter()
        .fold(HashMap::new, |mut acc, row| {
            *acc.entry(row.addon_guid.clone()).or_insert(0) += row.install_count;
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (guid, count) in right {
                *left.entry(guid).or_insert(0) += count;
            }
            left
        });

    let mut ranked: Vec<(String, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().collect()
}
