//! Core domain types for the addon catalog.
//!
//! The catalog dump is a GUID-keyed JSON object of addon records. Record
//! bodies are heterogeneous and must be persisted byte-for-byte on output,
//! so we keep them as raw `serde_json::Value` and read the handful of
//! fields classification cares about through [`RecordView`].

use crate::dates::parse_naive_datetime;
use crate::error::{CatalogError, Result};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde_json::Value;

/// Globally-unique identifier string for an addon
pub type Guid = String;

/// A GUID-keyed set of addon records.
///
/// `IndexMap` keeps insertion order, which is semantically meaningful for
/// result sets: accepted records are serialized in first-accepted order.
pub type RecordSet = IndexMap<Guid, Value>;

/// Borrowed, typed view over one raw catalog record.
///
/// Field access follows the dump's loose schema: absent booleans read as
/// false, an absent rating reads as 0. The one exception is
/// [`first_create_date`](RecordView::first_create_date), where a missing or
/// malformed value is a data-quality fault rather than a default.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    guid: &'a str,
    record: &'a Value,
}

impl<'a> RecordView<'a> {
    pub fn new(guid: &'a str, record: &'a Value) -> Self {
        Self { guid, record }
    }

    pub fn guid(&self) -> &str {
        self.guid
    }

    /// Editorial promotion flag. Absent means not featured.
    pub fn is_featured(&self) -> bool {
        self.record
            .get("is_featured")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Files published with the addon's current version.
    ///
    /// Returns an empty slice when the record has no `current_version`,
    /// no `files`, or a non-array `files` value. Some addons genuinely
    /// have no files in their latest version.
    pub fn current_version_files(&self) -> &'a [Value] {
        self.record
            .get("current_version")
            .and_then(|version| version.get("files"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the *first* file of the current version is a webextension.
    ///
    /// Only the first file is inspected; legacy addon technology in the
    /// first slot disqualifies the addon even if a later file entry is a
    /// webextension. False when the file list is empty.
    pub fn first_file_is_webextension(&self) -> bool {
        self.current_version_files()
            .first()
            .map(file_is_webextension)
            .unwrap_or(false)
    }

    /// Whether *any* file of the current version is a webextension.
    ///
    /// Used by the derived external whitelist, which is intentionally more
    /// permissive than the classification rule's first-file check.
    pub fn has_webextension_file(&self) -> bool {
        self.current_version_files()
            .iter()
            .any(file_is_webextension)
    }

    /// Average user rating, 0 when the record has none.
    pub fn average_rating(&self) -> f64 {
        self.record
            .get("ratings")
            .and_then(|ratings| ratings.get("average"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// The addon's first creation date as a timezone-naive date-time.
    ///
    /// # Errors
    /// A missing or unparseable field is a defect in the upstream dump, not
    /// a normal rejection path, and surfaces as a typed [`CatalogError`].
    pub fn first_create_date(&self) -> Result<NaiveDateTime> {
        let raw = self
            .record
            .get("first_create_date")
            .and_then(Value::as_str)
            .ok_or_else(|| CatalogError::MissingCreateDate {
                guid: self.guid.to_string(),
            })?;

        parse_naive_datetime(raw).ok_or_else(|| CatalogError::InvalidCreateDate {
            guid: self.guid.to_string(),
            value: raw.to_string(),
        })
    }
}

fn file_is_webextension(file: &Value) -> bool {
    file.get("is_webextension")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
