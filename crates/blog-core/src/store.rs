//! The record store - the only way in or out of the persisted post collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Collection, Post, PostChanges, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::CollectionStorage;

/// Serializes every access to a [`CollectionStorage`] backend.
///
/// Each operation holds the lock from load to save, so two requests can never
/// compute an id from the same snapshot or overwrite each other's changes.
pub struct RecordStore {
    storage: Arc<dyn CollectionStorage>,
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn CollectionStorage>) -> Self {
        Self {
            storage,
            lock: Mutex::new(()),
        }
    }

    pub async fn load_all(&self) -> Result<Collection, RepoError> {
        let _guard = self.lock.lock().await;
        self.storage.load().await
    }

    pub async fn save_all(&self, posts: &Collection) -> Result<(), RepoError> {
        let _guard = self.lock.lock().await;
        self.storage.save(posts).await
    }

    /// Load, apply `mutate`, and save, as one critical section.
    ///
    /// Nothing is written if `mutate` fails or leaves the collection as it was.
    pub async fn transact<T, F>(&self, mutate: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut Collection) -> Result<T, DomainError>,
    {
        let _guard = self.lock.lock().await;

        let before = self.storage.load().await?;
        let mut after = before.clone();
        let output = mutate(&mut after)?;

        if after == before {
            tracing::debug!("Collection unchanged, skipping save");
        } else {
            self.storage.save(&after).await?;
        }

        Ok(output)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, RepoError> {
        let posts = self.load_all().await?;
        Ok(posts.get(id)?.clone())
    }

    pub async fn create(&self, author: &str, title: &str, content: &str) -> Result<Post, RepoError> {
        let post = self
            .transact(|posts| posts.create(author, title, content).cloned())
            .await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let post = self
            .transact(|posts| posts.update(id, changes).cloned())
            .await?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Remove a post. Deleting an unknown id succeeds and writes nothing.
    pub async fn delete(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let removed = self.transact(|posts| Ok(posts.delete(id))).await?;
        match &removed {
            Some(_) => tracing::info!(post_id = id, "Post deleted"),
            None => tracing::debug!(post_id = id, "Delete of unknown post ignored"),
        }
        Ok(removed)
    }

    pub async fn like(&self, id: PostId) -> Result<Post, RepoError> {
        let post = self.transact(|posts| posts.like(id).cloned()).await?;
        tracing::info!(post_id = id, likes = post.like, "Post liked");
        Ok(post)
    }
}
