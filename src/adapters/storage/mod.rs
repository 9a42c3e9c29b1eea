//! Key-value storage adapters.

mod file;
mod in_memory;

pub use file::FileKeyValueStorage;
pub use in_memory::InMemoryKeyValueStorage;
