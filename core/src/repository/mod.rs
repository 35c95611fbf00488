pub mod catalog;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use catalog::{builtin_catalog, load_catalog, parse_catalog};
pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use traits::KeyValueStore;
