use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("client-side storage is unavailable")]
    Unavailable,
    #[error("write to client-side storage failed: {key}")]
    WriteFailed { key: String },
    #[error("failed to serialize value for key {key}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Durable client-side key/value storage. Values are opaque strings;
/// callers own the encoding.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser builds.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage` backend. Holds no JS handles; the window is
/// looked up per call so the type stays `Send + Sync`.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}

/// Platform default: `localStorage` in the browser, memory elsewhere.
pub fn default_backend() -> Arc<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryStorage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k"), Some("v".to_string()));
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k"), Some("v2".to_string()));
    }
}
