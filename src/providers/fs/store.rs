use crate::{
    errors::{AppError, IOError},
    providers::{
        fs::path::{get_key_file_path, get_key_temp_file_path},
        store::KeyValueStore,
    },
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs::{create_dir_all, read, remove_file, rename, write};

/// One file per key under the base directory. Values are written to a
/// scratch file first and renamed into place, so a key file always holds a
/// complete value.
pub struct FileSystemStore(PathBuf);

impl FileSystemStore {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

#[async_trait]
impl KeyValueStore for FileSystemStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = get_key_file_path(&self.0, key);
        match read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::IO(IOError::from(e))),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError> {
        create_dir_all(&self.0)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let temp_path = get_key_temp_file_path(&self.0, key);
        write(&temp_path, value)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        rename(&temp_path, get_key_file_path(&self.0, key))
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = get_key_file_path(&self.0, key);
        match remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::IO(IOError::from(e))),
        }
    }
}
