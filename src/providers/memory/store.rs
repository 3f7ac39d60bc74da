use crate::{errors::AppError, providers::store::KeyValueStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Keeps every value in process memory; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore(Mutex<HashMap<String, Vec<u8>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.lock().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.0.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError> {
        self.0.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.0.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_overwrites_and_remove_is_idempotent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.expect("expected a read"), None);
        store.set("k", b"one".to_vec()).await.expect("expected a write");
        store.set("k", b"two".to_vec()).await.expect("expected a write");
        assert_eq!(
            store.get("k").await.expect("expected a read"),
            Some(b"two".to_vec())
        );
        store.remove("k").await.expect("expected a remove");
        store.remove("k").await.expect("expected a second remove");
        assert!(store.keys().await.is_empty());
    }
}
