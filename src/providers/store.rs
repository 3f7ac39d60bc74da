use crate::errors::AppError;
use async_trait::async_trait;

/// Schemaless async persistence the repositories are built on.
///
/// Values are opaque bytes addressed by a string key. A missing key is not a
/// fault: `get` answers `None` and `remove` succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
