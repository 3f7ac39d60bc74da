use crate::{errors::AppError, shapes::player::PlayerEntry};
use async_trait::async_trait;

#[async_trait]
pub trait PlayerReader {
    async fn get_by_group(&self, group: &str) -> Result<Vec<PlayerEntry>, AppError>;
    async fn get_by_group_and_team(
        &self,
        group: &str,
        team: &str,
    ) -> Result<Vec<PlayerEntry>, AppError>;
}
