//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! - [`JsonFileStorage`] - the collection as one pretty-printed JSON document,
//!   replaced atomically on every save.
//! - [`InMemoryStorage`] - no persistence; for tests and throwaway runs.

pub mod storage;

pub use storage::{InMemoryStorage, JsonFileStorage};
