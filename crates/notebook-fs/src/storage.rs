//! Storage backends
//!
//! [`StorageBackend`] is the persistence boundary injected into the
//! configuration engine. It abstracts existence checks and text I/O over
//! [`ConfigLocation`]s so the engine can run against the real filesystem
//! ([`LocalStorage`]) or an in-memory fake ([`MemoryStorage`]) without
//! code changes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::fs;

use crate::{ConfigLocation, Error, Result};

/// The persistence boundary for configuration documents.
///
/// Implementations must be safe to share across tasks; all methods take
/// `&self` and return crate [`Result`]s so callers can pattern-match on
/// the failure instead of catching panics.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Check whether a document exists at `location`.
    async fn exists(&self, location: &ConfigLocation) -> bool;

    /// Read the full text content at `location`.
    async fn read_text(&self, location: &ConfigLocation) -> Result<String>;

    /// Write `content` to `location`, replacing any previous content.
    async fn write_text(&self, location: &ConfigLocation, content: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    async fn exists(&self, location: &ConfigLocation) -> bool {
        (**self).exists(location).await
    }

    async fn read_text(&self, location: &ConfigLocation) -> Result<String> {
        (**self).read_text(location).await
    }

    async fn write_text(&self, location: &ConfigLocation, content: &str) -> Result<()> {
        (**self).write_text(location, content).await
    }
}

/// Filesystem-backed storage using `tokio::fs`.
///
/// Writes go through a write-to-temp-then-rename strategy so a crashed
/// write never leaves a half-written config behind.
#[derive(Debug, Default, Clone)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalStorage {
    async fn exists(&self, location: &ConfigLocation) -> bool {
        fs::try_exists(location.path()).await.unwrap_or(false)
    }

    async fn read_text(&self, location: &ConfigLocation) -> Result<String> {
        let path = location.path();
        let bytes = fs::read(&path).await.map_err(|e| Error::io(&path, e))?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { path })
    }

    async fn write_text(&self, location: &ConfigLocation, content: &str) -> Result<()> {
        let path = location.path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        // Temp file in the same directory, so the rename stays on one
        // filesystem and is atomic.
        let temp_name = format!(
            ".{}.{}.tmp",
            location.file_name(),
            std::process::id()
        );
        let temp_path = path.with_file_name(&temp_name);

        fs::write(&temp_path, content)
            .await
            .map_err(|e| Error::io(&temp_path, e))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| Error::io(&path, e))?;

        Ok(())
    }
}

/// In-memory storage keyed by full path.
///
/// Used by tests and embedders that want the engine without a real
/// filesystem. Contents live for the lifetime of the instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, bypassing the backend trait. Test convenience.
    pub fn insert(&self, location: &ConfigLocation, content: impl Into<String>) {
        self.entries().insert(location.path(), content.into());
    }

    /// Remove a document, as if it were deleted externally.
    pub fn remove(&self, location: &ConfigLocation) {
        self.entries().remove(&location.path());
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    async fn exists(&self, location: &ConfigLocation) -> bool {
        self.entries().contains_key(&location.path())
    }

    async fn read_text(&self, location: &ConfigLocation) -> Result<String> {
        let path = location.path();
        self.entries()
            .get(&path)
            .cloned()
            .ok_or(Error::NotFound { path })
    }

    async fn write_text(&self, location: &ConfigLocation, content: &str) -> Result<()> {
        self.entries().insert(location.path(), content.to_string());
        Ok(())
    }
}
