//! In-memory storage - used when no file should be touched.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Collection;
use blog_core::error::RepoError;
use blog_core::ports::CollectionStorage;

/// Keeps the collection in process memory.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStorage {
    posts: RwLock<Collection>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, e.g. fixtures in tests.
    pub fn with_posts(posts: Collection) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl CollectionStorage for InMemoryStorage {
    async fn load(&self) -> Result<Collection, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save(&self, posts: &Collection) -> Result<(), RepoError> {
        *self.posts.write().await = posts.clone();
        Ok(())
    }
}
