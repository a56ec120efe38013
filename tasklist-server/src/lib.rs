//! tasklist-server: JSON item API over a single flat file
//!
//! Exposes a task list as an HTTP resource. Each request loads the whole
//! collection from disk, mutates it in memory, and writes it back in full.

pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Item, ItemText, ValidationError};
pub use store::{new_id, ItemStore, JsonFileStore, MutationQueue, StoreConfig, StoreError};
