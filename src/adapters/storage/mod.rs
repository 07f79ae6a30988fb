//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! - **FileKeyValueStore** - one JSON text file per key on disk
//! - **InMemoryKeyValueStore** - serialized entries in memory (testing)

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
