//! # Blog Core
//!
//! The domain layer of the blog record store.
//! Posts, the collection they live in, and the [`RecordStore`] that serializes
//! every load-mutate-save cycle. Storage backends live in `blog-infra`.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{DomainError, RepoError};
pub use store::RecordStore;
