//! Adapters - Implementations of port interfaces.

pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
