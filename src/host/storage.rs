//! Persistent key-value storage.
//!
//! Third resolution tier. The resolver only ever reads; the write path exists
//! on the store so callers and tests can seed entries.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ResolveResult;

/// A persistent string-keyed store of string values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value by key. Absent keys are `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> ResolveResult<Option<String>>;

    /// Store a value under a key.
    async fn put(&self, key: &str, value: &str) -> ResolveResult<()>;
}

/// Key-value store backed by a single JSON object file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location in the user's home directory
    /// (`~/.provision/storage.json`).
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|path| Self::new(path.join(".provision").join("storage.json")))
    }

    async fn read_map(&self) -> ResolveResult<serde_json::Map<String, Value>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(serde_json::Map::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> ResolveResult<Option<String>> {
        let map = self.read_map().await?;
        Ok(map.get(key).and_then(|v| v.as_str()).map(String::from))
    }

    async fn put(&self, key: &str, value: &str) -> ResolveResult<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let serialized = serde_json::to_string_pretty(&map)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_on_missing_file_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        assert!(store.get("workflow_anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        store.put("workflow_demo", "workflow:\n  steps: {}\n").await.unwrap();
        store.put("other", "value").await.unwrap();

        let value = store.get("workflow_demo").await.unwrap().unwrap();
        assert!(value.contains("steps"));
        assert_eq!(store.get("other").await.unwrap().unwrap(), "value");
    }

    #[tokio::test]
    async fn test_malformed_store_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.get("any").await.is_err());
    }
}
