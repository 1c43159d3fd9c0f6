//! Storage capability layer for Notebook Manager
//!
//! Provides the location model and the injected storage backend used by
//! the configuration engine. Backends expose existence checks and text
//! read/write over a [`ConfigLocation`]; the engine never touches the
//! filesystem directly.

pub mod error;
pub mod location;
pub mod storage;

pub use error::{Error, Result};
pub use location::ConfigLocation;
pub use storage::{LocalStorage, MemoryStorage, StorageBackend};
