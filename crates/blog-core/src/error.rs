//! Domain-level error types.

use thiserror::Error;

use crate::domain::{PostField, PostId};

/// Domain errors - business rule failures, raised before anything is mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: empty field(s): {}", join_fields(.fields))]
    Validation { fields: Vec<PostField> },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error("No post id left above the current maximum")]
    IdsExhausted,
}

impl DomainError {
    pub fn post_not_found(id: PostId) -> Self {
        Self::NotFound {
            entity_type: "post",
            id,
        }
    }
}

/// Record store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt data: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn join_fields(fields: &[PostField]) -> String {
    fields
        .iter()
        .map(PostField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
