use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post identifier. Positive, unique within a collection, never reassigned.
pub type PostId = u64;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    /// Older documents were written before likes existed.
    #[serde(default)]
    pub like: u64,
}

impl Post {
    /// Create a new post from already validated fields.
    pub(crate) fn new(id: PostId, fields: PostFields) -> Self {
        Self {
            id,
            author: fields.author,
            title: fields.title,
            content: fields.content,
            like: 0,
        }
    }
}

/// The user-editable text fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Author,
    Title,
    Content,
}

impl PostField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Author => "author",
            PostField::Title => "title",
            PostField::Content => "content",
        }
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trimmed, non-empty author/title/content for a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostFields {
    /// Trim every field and reject the submission if any of them ends up empty.
    pub fn parse(author: &str, title: &str, content: &str) -> Result<Self, DomainError> {
        let author = author.trim();
        let title = title.trim();
        let content = content.trim();

        let empty: Vec<PostField> = [
            (PostField::Author, author),
            (PostField::Title, title),
            (PostField::Content, content),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !empty.is_empty() {
            return Err(DomainError::Validation { fields: empty });
        }

        Ok(Self {
            author: author.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }
}

/// Partial update - `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Trim the provided fields, failing if any of them is blank.
    fn normalized(self) -> Result<Self, DomainError> {
        let mut empty = Vec::new();
        let mut trim = |field: PostField, value: Option<String>| {
            value.map(|v| {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    empty.push(field);
                }
                trimmed.to_owned()
            })
        };

        let normalized = Self {
            author: trim(PostField::Author, self.author),
            title: trim(PostField::Title, self.title),
            content: trim(PostField::Content, self.content),
        };

        if empty.is_empty() {
            Ok(normalized)
        } else {
            Err(DomainError::Validation { fields: empty })
        }
    }

    /// Validate, then apply to `post`. On error `post` is left as it was.
    pub fn apply_to(self, post: &mut Post) -> Result<(), DomainError> {
        let changes = self.normalized()?;
        if let Some(author) = changes.author {
            post.author = author;
        }
        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        Ok(())
    }
}
