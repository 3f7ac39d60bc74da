use crate::errors::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait GroupWriter {
    async fn create(&self, name: &str) -> Result<(), AppError>;
    async fn remove_by_name(&self, name: &str) -> Result<(), AppError>;
}
