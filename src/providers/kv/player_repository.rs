use crate::{
    errors::{AppError, PlayerError},
    logging::logger::{log_debug, log_info},
    providers::{
        kv::{
            codec::{load_records, save_records},
            key::player_list_key,
        },
        player_reader::PlayerReader,
        player_writer::PlayerWriter,
        store::KeyValueStore,
    },
    shapes::player::{PlayerEntry, PlayerList},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Player lists, one per group, each stored under its own key.
///
/// The group is only a partition key here: adding players to a name that is
/// not in the group index is allowed and creates the list on the fly.
pub struct PlayerRepository<S: KeyValueStore + ?Sized>(Arc<S>);

impl<S: KeyValueStore + ?Sized> PlayerRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self(store)
    }

    async fn load_list(&self, group: &str) -> Result<PlayerList, AppError> {
        let key = player_list_key(group);
        let players: Vec<PlayerEntry> = load_records(self.0.as_ref(), &key).await?;
        Ok(PlayerList::new(players))
    }

    async fn save_list(&self, group: &str, list: &PlayerList) -> Result<(), AppError> {
        save_records(self.0.as_ref(), &player_list_key(group), list.as_slice()).await
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> PlayerReader for PlayerRepository<S> {
    async fn get_by_group(&self, group: &str) -> Result<Vec<PlayerEntry>, AppError> {
        Ok(self.load_list(group).await?.into_vec())
    }

    async fn get_by_group_and_team(
        &self,
        group: &str,
        team: &str,
    ) -> Result<Vec<PlayerEntry>, AppError> {
        Ok(self.load_list(group).await?.by_team(team))
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> PlayerWriter for PlayerRepository<S> {
    async fn add_by_group(&self, player: PlayerEntry, group: &str) -> Result<(), AppError> {
        let mut list = self.load_list(group).await?;
        let message = format!("added player {} to group '{}'", player, group);
        if let Err(rejected) = list.add(player) {
            return Err(AppError::Player(PlayerError::AlreadyExists {
                name: rejected.name,
                team: rejected.team,
                group: group.to_string(),
            }));
        }
        self.save_list(group, &list).await?;
        log_info(&message);
        Ok(())
    }

    async fn remove_by_group(&self, player_name: &str, group: &str) -> Result<(), AppError> {
        let mut list = self.load_list(group).await?;
        let removed = list.remove_by_name(player_name);
        if removed == 0 {
            log_debug(&format!(
                "no player named '{}' in group '{}'",
                player_name, group
            ));
            return Ok(());
        }
        self.save_list(group, &list).await?;
        log_info(&format!(
            "removed {} record(s) of player '{}' from group '{}'",
            removed, player_name, group
        ));
        Ok(())
    }
}
