use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Asynchronous string-keyed preference storage.
///
/// Every backend is async, including ones that could answer synchronously,
/// so callers never branch on the backing implementation.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}
