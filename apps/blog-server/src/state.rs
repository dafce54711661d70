//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RecordStore;
use blog_core::ports::CollectionStorage;
use blog_infra::{InMemoryStorage, JsonFileStorage};

use crate::config::StorageConfig;

/// Shared application state.
///
/// Holds the one `RecordStore` for the configured backend; every worker
/// clones the `Arc`, so all requests go through the same lock.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<RecordStore>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub fn new(config: &StorageConfig) -> Self {
        let storage: Arc<dyn CollectionStorage> = match config {
            StorageConfig::File { path } => {
                tracing::info!(path = %path.display(), "Using JSON file storage");
                Arc::new(JsonFileStorage::new(path.clone()))
            }
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory storage - posts will not survive a restart");
                Arc::new(InMemoryStorage::new())
            }
        };

        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Arc<dyn CollectionStorage>) -> Self {
        Self {
            posts: Arc::new(RecordStore::new(storage)),
        }
    }
}
