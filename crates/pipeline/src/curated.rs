//! Curated editorial GUID list.
//!
//! Parses the editorial-discovery document into the sorted GUID list the
//! recommender treats as its curated whitelist. Retrieval of the document
//! is an external collaborator; this module owns validation.

use crate::error::{PipelineError, Result};
use serde_json::Value;
use std::collections::BTreeSet;

/// Fewer editorial addons than this is treated as a truncated or broken
/// upstream response unless short lists are explicitly allowed.
pub const MIN_CURATED_GUIDS: usize = 100;

/// Extract the curated GUID list from an editorial document.
///
/// The document carries a `results` array whose rows nest the GUID under
/// `addon.guid`. Rows with an absent, null, `"null"`, or empty guid are
/// skipped. The output is sorted and de-duplicated.
///
/// # Arguments
/// * `document` - the editorial JSON document
/// * `allow_short_list` - accept fewer than [`MIN_CURATED_GUIDS`] entries
///
/// # Errors
/// * [`PipelineError::EmptyCuratedList`] - zero valid GUIDs; an empty
///   curated list is never valid, even with `allow_short_list`
/// * [`PipelineError::ShortCuratedList`] - below the minimum without
///   `allow_short_list`
pub fn parse_editorial_guids(document: &Value, allow_short_list: bool) -> Result<Vec<String>> {
    let rows = document
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let guids: BTreeSet<&str> = rows
        .iter()
        .filter_map(|row| row.get("addon").and_then(|addon| addon.get("guid")))
        .filter_map(Value::as_str)
        .filter(|guid| !guid.is_empty() && *guid != "null")
        .collect();

    if guids.is_empty() {
        return Err(PipelineError::EmptyCuratedList);
    }
    if !allow_short_list && guids.len() < MIN_CURATED_GUIDS {
        return Err(PipelineError::ShortCuratedList {
            count: guids.len(),
            minimum: MIN_CURATED_GUIDS,
        });
    }

    Ok(guids.into_iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_with(guids: &[&str]) -> Value {
        let results: Vec<Value> = guids
            .iter()
            .map(|guid| json!({"addon": {"guid": guid}}))
            .collect();
        json!({ "results": results })
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let document = document_with(&["z@example.com", "a@example.com", "z@example.com"]);
        let guids = parse_editorial_guids(&document, true).unwrap();
        assert_eq!(guids, ["a@example.com", "z@example.com"]);
    }

    #[test]
    fn test_invalid_guid_rows_are_skipped() {
        let document = json!({
            "results": [
                {"addon": {"guid": "ok@example.com"}},
                {"addon": {"guid": ""}},
                {"addon": {"guid": "null"}},
                {"addon": {}},
                {"addon": {"guid": null}},
                {},
            ]
        });
        let guids = parse_editorial_guids(&document, true).unwrap();
        assert_eq!(guids, ["ok@example.com"]);
    }

    #[test]
    fn test_short_list_is_rejected_by_default() {
        let document = document_with(&["a@example.com", "b@example.com"]);
        let err = parse_editorial_guids(&document, false).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ShortCuratedList { count: 2, .. }
        ));
    }

    #[test]
    fn test_full_length_list_passes_the_minimum() {
        let guids: Vec<String> = (0..MIN_CURATED_GUIDS)
            .map(|i| format!("addon-{i:03}@example.com"))
            .collect();
        let refs: Vec<&str> = guids.iter().map(String::as_str).collect();

        let parsed = parse_editorial_guids(&document_with(&refs), false).unwrap();
        assert_eq!(parsed.len(), MIN_CURATED_GUIDS);
    }

    #[test]
    fn test_empty_list_is_never_valid() {
        let err = parse_editorial_guids(&document_with(&[]), true).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCuratedList));

        let err = parse_editorial_guids(&json!({}), true).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCuratedList));
    }
}
