use crate::{
    errors::{AppError, GroupError},
    logging::logger::log_info,
    providers::{
        group_reader::GroupReader,
        group_writer::GroupWriter,
        kv::{
            codec::{load_records, save_records},
            key::{group_index_key, player_list_key},
        },
        store::KeyValueStore,
    },
    shapes::group::GroupIndex,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Group names persisted as a single ordered list under the group index key.
///
/// Every mutation reads the whole index and rewrites it; nothing here guards
/// against two writers interleaving on the same store, callers are expected
/// to issue one mutation at a time.
pub struct GroupRepository<S: KeyValueStore + ?Sized>(Arc<S>);

impl<S: KeyValueStore + ?Sized> GroupRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self(store)
    }

    async fn load_index(&self) -> Result<GroupIndex, AppError> {
        let names: Vec<String> = load_records(self.0.as_ref(), &group_index_key()).await?;
        Ok(GroupIndex::new(names))
    }

    async fn save_index(&self, index: &GroupIndex) -> Result<(), AppError> {
        save_records(self.0.as_ref(), &group_index_key(), index.as_slice()).await
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> GroupReader for GroupRepository<S> {
    async fn get_all(&self) -> Result<Vec<String>, AppError> {
        Ok(self.load_index().await?.into_vec())
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> GroupWriter for GroupRepository<S> {
    async fn create(&self, name: &str) -> Result<(), AppError> {
        let mut index = self.load_index().await?;
        if !index.add(name.to_string()) {
            return Err(AppError::Group(GroupError::AlreadyExists(name.to_string())));
        }
        self.save_index(&index).await?;
        log_info(&format!("created group '{}'", name));
        Ok(())
    }

    async fn remove_by_name(&self, name: &str) -> Result<(), AppError> {
        // players go first: a failure past this point leaves an empty group
        // in the index, never a hidden group that still owns players
        self.0.remove(&player_list_key(name)).await?;
        let mut index = self.load_index().await?;
        if index.remove(name) {
            self.save_index(&index).await?;
            log_info(&format!("removed group '{}'", name));
        }
        Ok(())
    }
}
