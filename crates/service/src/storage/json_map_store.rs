use std::{
    collections::HashMap,
    hash::Hash,
    marker::PhantomData,
    path::{Path, PathBuf},
};
use tokio::fs;

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Every call goes back to disk: reads parse the whole file and writes
/// replace the whole file. Nothing is cached between calls and there is
/// no locking, so two concurrent load-modify-save cycles can lose an update.
#[derive(Debug, Clone)]
pub struct JsonMapStore<K, V> {
    file_path: PathBuf,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Point the store at a file. The file is not touched until the first call.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _entries: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read and parse the whole file.
    pub async fn load(&self) -> Result<HashMap<K, V>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::storage(format!("read {}: {e}", self.file_path.display())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::storage(format!("parse {}: {e}", self.file_path.display())))
    }

    /// Rewrite the whole file with `map`, pretty-printed.
    pub async fn save(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map)
            .map_err(|e| ServiceError::storage(format!("serialize: {e}")))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::storage(format!("write {}: {e}", self.file_path.display())))?;
        Ok(())
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Result<Option<V>, ServiceError> {
        let map = self.load().await?;
        Ok(map.get(key).cloned())
    }

    /// Load, apply a mutation, then rewrite the file. A mutation error
    /// leaves the file untouched.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.load().await?;
        let out = f(&mut map)?;
        self.save(&map).await?;
        Ok(out)
    }
}
