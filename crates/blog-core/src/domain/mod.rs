//! Domain entities - the core business objects.

mod collection;
mod post;

pub use collection::{Collection, IntegrityError};
pub use post::{Post, PostChanges, PostField, PostFields, PostId};
