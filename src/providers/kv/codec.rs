use crate::{
    errors::{AppError, IOError},
    logging::logger::log_warn,
    providers::store::KeyValueStore,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{from_slice, from_value, to_vec_pretty, Value};

/// Decodes a stored JSON array, keeping every element that decodes as `T`.
///
/// A document that is not an array at all is a storage fault; single
/// malformed elements are logged and skipped.
pub fn decode_records<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<Vec<T>, AppError> {
    let values: Vec<Value> = from_slice(bytes).map_err(|e| AppError::IO(IOError::from(e)))?;
    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log_warn(&format!(
                    "skipping malformed record #{} under '{}': {}",
                    position, key, e
                ));
                None
            }
        })
        .collect();
    Ok(records)
}

pub fn encode_records<T: Serialize>(records: &[T]) -> Result<Vec<u8>, AppError> {
    to_vec_pretty(records).map_err(|e| AppError::IO(IOError::from(e)))
}

/// Reads the whole collection stored under `key`; an absent key is empty.
pub async fn load_records<S, T>(store: &S, key: &str) -> Result<Vec<T>, AppError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(bytes) => decode_records(key, &bytes),
        None => Ok(vec![]),
    }
}

/// Replaces the whole collection stored under `key`.
pub async fn save_records<S, T>(store: &S, key: &str, records: &[T]) -> Result<(), AppError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + Sync,
{
    let bytes = encode_records(records)?;
    store.set(key, bytes).await
}
