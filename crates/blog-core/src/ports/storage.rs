use async_trait::async_trait;

use crate::domain::Collection;
use crate::error::RepoError;

/// Raw persistence for the post collection (JSON file, in-memory).
///
/// Implementations only read and write whole collections. Serializing access
/// is the job of [`RecordStore`](crate::RecordStore), which must be the only
/// caller of a given backend.
#[async_trait]
pub trait CollectionStorage: Send + Sync {
    /// Read the persisted collection. A store that does not exist yet, or is
    /// empty, reads as an empty collection.
    async fn load(&self) -> Result<Collection, RepoError>;

    /// Replace the persisted collection. A failure must leave the previous
    /// contents readable.
    async fn save(&self, posts: &Collection) -> Result<(), RepoError>;
}
