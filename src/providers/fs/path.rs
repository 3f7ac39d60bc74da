use crate::{
    constants::{
        BASE_DIR_ENV_VAR, BASE_DIR_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME, STORE_FILE_EXTENSION,
    },
    errors::{AppError, IOError},
};
use dirs::home_dir;
use std::{
    env::var_os,
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Resolves the data directory, `$TEAMROSTER_HOME` first and `~/.teamroster`
/// otherwise, creating it when missing.
pub fn get_base_path() -> Result<PathBuf, AppError> {
    let path = match var_os(BASE_DIR_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let mut path = home_dir().ok_or(AppError::IO(IOError::Msg(
                "could not recognize home directory".to_string(),
            )))?;
            path.push(BASE_DIR_NAME);
            path
        }
    };
    if !path.exists() {
        create_dir_all(&path).map_err(|e| {
            AppError::IO(IOError::Msg(format!(
                "could not create app directory '{}': {}",
                path.display(),
                e
            )))
        })?;
    }
    Ok(path)
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE_NAME)
}

pub fn get_log_file_path(base_path: &Path) -> PathBuf {
    base_path.join(LOG_FILE_NAME)
}

pub fn get_key_file_path(base_path: &Path, key: &str) -> PathBuf {
    base_path.join(format!("{}.{}", key_to_file_stem(key), STORE_FILE_EXTENSION))
}

/// Scratch file a value is written to before being renamed over the key file.
pub fn get_key_temp_file_path(base_path: &Path, key: &str) -> PathBuf {
    base_path.join(format!(
        "{}.{}.tmp",
        key_to_file_stem(key),
        STORE_FILE_EXTENSION
    ))
}

/// Maps a store key to a fixed-length, lowercase file stem (a v5 UUID of the
/// key), whatever the length or case of the group name inside the key.
fn key_to_file_stem(key: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}
