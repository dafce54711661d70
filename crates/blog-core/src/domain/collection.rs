//! The full, ordered set of posts - the unit of load and save.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::post::{Post, PostChanges, PostFields, PostId};
use crate::error::DomainError;

/// Integrity violations found in a persisted collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("post id {0} appears more than once")]
    DuplicateId(PostId),

    #[error("post id must be positive")]
    ZeroId,
}

/// Ordered posts with pairwise distinct ids. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Post>")]
pub struct Collection {
    posts: Vec<Post>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// One past the highest id, or 1 for an empty collection.
    pub fn next_id(&self) -> Result<PostId, DomainError> {
        self.posts
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(DomainError::IdsExhausted)
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: PostId) -> Result<&Post, DomainError> {
        self.find(id).ok_or_else(|| DomainError::post_not_found(id))
    }

    fn get_mut(&mut self, id: PostId) -> Result<&mut Post, DomainError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Validate the fields and append a new post with a fresh id.
    pub fn create(&mut self, author: &str, title: &str, content: &str) -> Result<&Post, DomainError> {
        let fields = PostFields::parse(author, title, content)?;
        let id = self.next_id()?;
        self.posts.push(Post::new(id, fields));
        Ok(&self.posts[self.posts.len() - 1])
    }

    pub fn update(&mut self, id: PostId, changes: PostChanges) -> Result<&Post, DomainError> {
        let post = self.get_mut(id)?;
        changes.apply_to(post)?;
        Ok(&*post)
    }

    /// Remove the post with `id`. Returns the removed post; a missing id is not an error.
    pub fn delete(&mut self, id: PostId) -> Option<Post> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(index))
    }

    pub fn like(&mut self, id: PostId) -> Result<&Post, DomainError> {
        let post = self.get_mut(id)?;
        post.like = post.like.saturating_add(1);
        Ok(&*post)
    }
}

impl TryFrom<Vec<Post>> for Collection {
    type Error = IntegrityError;

    fn try_from(posts: Vec<Post>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if post.id == 0 {
                return Err(IntegrityError::ZeroId);
            }
            if !seen.insert(post.id) {
                return Err(IntegrityError::DuplicateId(post.id));
            }
        }
        Ok(Self { posts })
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.posts.serialize(serializer)
    }
}
