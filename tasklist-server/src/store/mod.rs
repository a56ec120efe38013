//! Item persistence - the whole collection is the unit of load and save
//!
//! There is no cache: every request re-reads the collection from durable
//! storage and writes it back in full. Concurrent mutations race unless the
//! caller holds a [`MutationQueue`] permit around the read-modify-write cycle.

pub mod config;
pub mod file;
pub mod queue;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::Item;

pub use config::StoreConfig;
pub use file::JsonFileStore;
pub use queue::MutationQueue;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence over the full item collection.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Read every stored item in stored order.
    ///
    /// Never fails: a missing, unreadable, or corrupt backing resource reads
    /// as an empty collection.
    async fn load_all(&self) -> Vec<Item>;

    /// Replace the stored collection with `items`.
    async fn save_all(&self, items: &[Item]) -> Result<(), StoreError>;
}

/// Generate a new item id: `<unix millis>-<16 hex chars>`.
pub fn new_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..16])
}
