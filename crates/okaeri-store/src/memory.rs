use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::PreferenceStore;

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry before the store is shared.
    #[must_use]
    pub fn with_entry(self, key: &str, value: Value) -> Self {
        let mut entries = self.entries.into_inner();
        entries.insert(key.to_string(), value);
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let guard = self.entries.lock().await;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().await;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = MemoryStore::new().with_entry("k", serde_json::json!("old"));
        store.set("k", serde_json::json!("new")).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(serde_json::json!("new")));
    }
}
