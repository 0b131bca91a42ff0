//! JSON-object file backend, the on-disk analogue of a browser profile's
//! local storage area.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::PreferenceStore;

/// Stores every key in one JSON object file.
///
/// A missing file reads as empty. Writes go to a sibling temp file that is
/// then renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&content).map_err(|e| StoreError::Decode {
            context: self.path.display().to_string(),
            source: e,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject {
                path: self.path.display().to_string(),
            }),
        }
    }

    async fn write_all(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(map).map_err(|e| StoreError::Encode {
            key: "*".to_string(),
            source: e,
        })?;

        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut map = self.read_all().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_all().await?;
        map.insert(key.to_string(), value);
        self.write_all(&map).await?;
        tracing::debug!(path = %self.path.display(), key, "preference written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        assert!(store.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        store.set("a", serde_json::json!(1)).await.unwrap();
        store.set("b", serde_json::json!(["x"])).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some(serde_json::json!(1)));
        assert_eq!(
            store.get("b").await.unwrap(),
            Some(serde_json::json!(["x"]))
        );
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let store = JsonFileStore::new(&path);
        store.set("k", serde_json::json!("v")).await.unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("k").await,
            Err(StoreError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn non_object_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("k").await,
            Err(StoreError::NotAnObject { .. })
        ));
    }
}
