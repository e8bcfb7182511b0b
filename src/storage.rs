use crate::errors::ProgressError;
use serde::{Serialize, de::DeserializeOwned};
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const HABITS_FILE: &str = "habits.json";
pub const TIME_DATA_FILE: &str = "time_data.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

#[derive(Debug, Clone)]
pub struct BlobStore {
    path: PathBuf,
}

impl BlobStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(data) => data,
                Err(err) => {
                    error!("failed to parse {}: {err}", self.path.display());
                    T::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
            Err(err) => {
                error!("failed to read {}: {err}", self.path.display());
                T::default()
            }
        }
    }

    pub async fn save<T: Serialize>(&self, value: &T) -> Result<(), ProgressError> {
        let payload = serde_json::to_vec_pretty(value)
            .map_err(|err| ProgressError::StorageUnavailable(err.to_string()))?;
        fs::write(&self.path, payload)
            .await
            .map_err(|err| ProgressError::StorageUnavailable(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeriesData;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_tracker_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let store = BlobStore::new(temp_path("missing"));
        let data: SeriesData = store.load().await;
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_degrades_to_empty() {
        let path = temp_path("malformed");
        fs::write(&path, b"{not json").await.unwrap();

        let store = BlobStore::new(path.clone());
        let data: SeriesData = store.load().await;
        assert!(data.habits.is_empty());

        let _ = fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let store = BlobStore::new(path.clone());

        let mut data = SeriesData::default();
        data.habits.insert("h1".to_string(), Vec::new());
        store.save(&data).await.unwrap();

        let loaded: SeriesData = store.load().await;
        assert!(loaded.habits.contains_key("h1"));

        let _ = fs::remove_file(path).await;
    }
}
