//! Single-file JSON store
//!
//! The collection is one pretty-printed JSON array. Saves go to a sibling
//! temp file which is then renamed over the target, so readers never see a
//! half-written document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use super::{ItemStore, StoreConfig, StoreError};
use crate::models::Item;

/// [`ItemStore`] backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("items.json");
        let tmp = format!(".{}.{}.tmp", name, Uuid::new_v4().simple());
        self.path().with_file_name(tmp)
    }

    /// Write `body` to `tmp`, then rename it over the data file. `tmp` is
    /// removed again if either step fails.
    async fn write_replace(&self, tmp: &Path, body: String) -> Result<(), StoreError> {
        if let Err(e) = fs::write(tmp, body).await {
            let _ = fs::remove_file(tmp).await;
            return Err(self.io_error(tmp, e));
        }
        if let Err(e) = fs::rename(tmp, self.path()).await {
            let _ = fs::remove_file(tmp).await;
            return Err(self.io_error(self.path(), e));
        }
        Ok(())
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    async fn load_all(&self) -> Vec<Item> {
        let raw = match fs::read_to_string(self.path()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path().display(), "data file missing, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "failed to read data file");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "data file is not a valid item list");
                Vec::new()
            }
        }
    }

    async fn save_all(&self, items: &[Item]) -> Result<(), StoreError> {
        if let Some(dir) = self.config.data_dir() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| self.io_error(dir, e))?;
        }

        let body = serde_json::to_string_pretty(items)?;
        self.write_replace(&self.temp_path(), body).await?;

        tracing::debug!(path = %self.path().display(), count = items.len(), "items saved");
        Ok(())
    }
}
