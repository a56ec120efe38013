//! Store configuration - data file location
//!
//! Configuration is loaded from environment variables:
//! - `TASKLIST_DATA_FILE`: JSON file holding the collection (default: data/items.json)

use std::path::{Path, PathBuf};

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/items.json";

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// JSON document holding every item
    pub data_file: PathBuf,
}

impl StoreConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let data_file = std::env::var("TASKLIST_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Create config with an explicit data file (for testing)
    pub fn with_path(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Directory that must exist before the first write
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
