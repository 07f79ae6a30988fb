//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - the origin-scoped persisted store holding the
//!   account collection, the active session, and the comment log

mod key_value_store;

pub use key_value_store::{KeyValueStore, StorageError, StorageKey};
