//! Collection storage backends - JSON file and in-memory.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::InMemoryStorage;
