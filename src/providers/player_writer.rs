use crate::{errors::AppError, shapes::player::PlayerEntry};
use async_trait::async_trait;

#[async_trait]
pub trait PlayerWriter {
    async fn add_by_group(&self, player: PlayerEntry, group: &str) -> Result<(), AppError>;
    async fn remove_by_group(&self, player_name: &str, group: &str) -> Result<(), AppError>;
}
