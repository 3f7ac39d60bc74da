use crate::errors::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait GroupReader {
    async fn get_all(&self) -> Result<Vec<String>, AppError>;
}
