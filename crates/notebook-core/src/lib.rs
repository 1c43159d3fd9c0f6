//! Layered configuration engine for Notebook Manager
//!
//! Reconciles a persisted base configuration, a workspace-local
//! override, a home-scope override, and a schema-complete default set
//! into a single resolved configuration, while keeping the base file
//! free of values owned by an override layer.
//!
//! # Architecture
//!
//! `notebook-core` sits above the storage capability and below the
//! CLI/UI layer:
//!
//! ```text
//!            CLI / UI flows
//!                  |
//!            notebook-core
//!     (schema, codec, merge, overrides,
//!        cache, ConfigStore)
//!                  |
//!             notebook-fs
//!        (injected StorageBackend)
//! ```
//!
//! Precedence chain when resolving with overrides:
//! workspace-override > home-override > base raw value > schema default.
//!
//! # Example
//!
//! ```ignore
//! use notebook_core::{ConfigStore, ReadMode, ReadOptions};
//! use notebook_fs::LocalStorage;
//!
//! let mut store = ConfigStore::new(LocalStorage::new(), "/path/to/workspace");
//! let config = store.read(ReadOptions::new(ReadMode::Override)).await?;
//! println!("vaults: {}", config.vaults.len());
//! ```

pub mod cache;
pub mod codec;
pub mod constants;
pub mod error;
pub mod merge;
pub mod overrides;
pub mod schema;
pub mod store;

pub use cache::{ConfigCache, ReadMode};
pub use error::{ConfigError, Result};
pub use merge::{WriteFilter, deep_merge, merge_defaults, merge_override, subtract_overrides};
pub use overrides::OverrideResolver;
pub use schema::{
    DevSettings, JournalSettings, NotebookConfig, PartialConfig, PreviewSettings, VaultEntry,
    WorkspaceSettings,
};
pub use store::{ConfigStore, ReadOptions};
