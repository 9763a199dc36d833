//! JSON document store implementations.
//!
//! [`JsonStore`] models the object-storage boundary the batch jobs sit
//! behind. Every write produces two copies: the "latest" copy the serving
//! side reads, and a dated retention copy. Transport, compression, and
//! bucket plumbing belong to the real object-storage collaborator and are
//! not modeled here.

use crate::error::{Result, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// A named JSON document store.
///
/// Names are bare artifact names (`whitelist_addons_database`); the store
/// owns the mapping to concrete object names.
pub trait JsonStore {
    /// Read the latest copy of a named document.
    ///
    /// # Errors
    /// [`StoreError::MissingObject`] when the document has never been
    /// written; [`StoreError::Json`] when the stored bytes are corrupt.
    fn read_json(&self, name: &str) -> Result<Value>;

    /// Write a document as both the latest copy and a dated retention
    /// copy (`<name>.json` and `<name>.<date_tag>.json`).
    ///
    /// Failure is fatal to the run: there is no partial-result recovery,
    /// so callers must not treat a half-written pair as success.
    fn write_json(&self, name: &str, value: &Value, date_tag: &str) -> Result<()>;
}

/// Filesystem-backed store rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl JsonStore for DirStore {
    fn read_json(&self, name: &str) -> Result<Value> {
        let path = self.object_path(&format!("{name}.json"));
        let bytes = fs::read(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::MissingObject {
                name: path.display().to_string(),
            },
            _ => StoreError::Io(err),
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_json(&self, name: &str, value: &Value, date_tag: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let bytes = serde_json::to_vec(value)?;

        for file_name in [format!("{name}.json"), format!("{name}.{date_tag}.json")] {
            let path = self.object_path(&file_name);
            fs::write(&path, &bytes)?;
            tracing::info!("Wrote {}", path.display());
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemStore {
    objects: Mutex<HashMap<String, Value>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document under its latest-copy name.
    pub fn insert(&self, name: &str, value: Value) {
        self.objects
            .lock()
            .expect("store mutex poisoned")
            .insert(format!("{name}.json"), value);
    }

    /// Fetch any stored copy by full object name, dated copies included.
    pub fn get(&self, object_name: &str) -> Option<Value> {
        self.objects
            .lock()
            .expect("store mutex poisoned")
            .get(object_name)
            .cloned()
    }
}

impl JsonStore for MemStore {
    fn read_json(&self, name: &str) -> Result<Value> {
        let object_name = format!("{name}.json");
        self.get(&object_name)
            .ok_or(StoreError::MissingObject { name: object_name })
    }

    fn write_json(&self, name: &str, value: &Value, date_tag: &str) -> Result<()> {
        let mut objects = self.objects.lock().expect("store mutex poisoned");
        objects.insert(format!("{name}.json"), value.clone());
        objects.insert(format!("{name}.{date_tag}.json"), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());

        let value = json!({"a@example.com": {"ratings": {"average": 4.0}}});
        store.write_json("whitelist_addons_database", &value, "20240601").unwrap();

        let read_back = store.read_json("whitelist_addons_database").unwrap();
        assert_eq!(read_back, value);
    }

    #[test]
    fn test_dir_store_writes_latest_and_dated_copies() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());

        store
            .write_json("featured_addons_database", &json!({}), "20240601")
            .unwrap();

        assert!(dir.path().join("featured_addons_database.json").exists());
        assert!(dir.path().join("featured_addons_database.20240601.json").exists());
    }

    #[test]
    fn test_missing_object_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());

        let err = store.read_json("never_written").unwrap_err();
        assert!(matches!(err, StoreError::MissingObject { .. }));
    }

    #[test]
    fn test_corrupt_document_surfaces_as_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), b"{not json").unwrap();

        let store = DirStore::new(dir.path());
        let err = store.read_json("broken").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_mem_store_round_trip() {
        let store = MemStore::new();
        store.write_json("guid_install_ranking", &json!({"a": 3}), "20240601").unwrap();

        assert_eq!(store.read_json("guid_install_ranking").unwrap(), json!({"a": 3}));
        assert_eq!(
            store.get("guid_install_ranking.20240601.json").unwrap(),
            json!({"a": 3})
        );
    }
}
