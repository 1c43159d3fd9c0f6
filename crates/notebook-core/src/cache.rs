//! Resolved-config cache
//!
//! Memoizes the most recently resolved configuration per read mode for
//! one store instance. Entries never expire on their own; they are
//! replaced by a fresh non-cached read and cleared by a write. A cache
//! hit is served even if the underlying file has since changed or been
//! deleted — callers that need freshness must bypass the cache.

use std::collections::HashMap;

use crate::schema::NotebookConfig;

/// How `read` resolves the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadMode {
    /// Base raw content over schema defaults; overrides ignored.
    Default,
    /// Workspace-override > home-override > base raw value > default.
    Override,
}

/// Per-store memo of resolved configurations, keyed by read mode.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: HashMap<ReadMode, NotebookConfig>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mode: ReadMode) -> Option<&NotebookConfig> {
        self.entries.get(&mode)
    }

    pub fn insert(&mut self, mode: ReadMode, config: NotebookConfig) {
        self.entries.insert(mode, config);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_keyed_by_mode() {
        let mut cache = ConfigCache::new();
        assert!(cache.get(ReadMode::Default).is_none());

        let mut config = NotebookConfig::default();
        config.version = 9;
        cache.insert(ReadMode::Default, config.clone());

        assert_eq!(cache.get(ReadMode::Default), Some(&config));
        assert!(cache.get(ReadMode::Override).is_none());
    }

    #[test]
    fn insert_replaces_and_clear_empties() {
        let mut cache = ConfigCache::new();
        cache.insert(ReadMode::Override, NotebookConfig::default());

        let mut newer = NotebookConfig::default();
        newer.version = 2;
        cache.insert(ReadMode::Override, newer.clone());
        assert_eq!(cache.get(ReadMode::Override), Some(&newer));

        cache.clear();
        assert!(cache.get(ReadMode::Override).is_none());
    }
}
