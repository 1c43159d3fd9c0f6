//! Config store orchestration
//!
//! [`ConfigStore`] composes the storage capability, the schema defaults,
//! the YAML codec, the override resolver, the merge engine, and the
//! cache into the four public operations: `create`, `read_raw`, `read`
//! and `write`.
//!
//! One logical flow at a time per instance: operations take `&mut self`,
//! so two calls on the same store cannot interleave. No cross-process
//! coordination is attempted; concurrent external writers race and the
//! last successful write wins.

use std::path::{Path, PathBuf};

use notebook_fs::{ConfigLocation, StorageBackend};

use crate::cache::{ConfigCache, ReadMode};
use crate::codec;
use crate::constants;
use crate::error::{ConfigError, Result};
use crate::merge::{self, WriteFilter};
use crate::overrides::OverrideResolver;
use crate::schema::{NotebookConfig, PartialConfig};

/// Options for [`ConfigStore::read`].
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub mode: ReadMode,

    /// Serve a previously resolved snapshot for this mode when one
    /// exists, without touching storage. Stale by design; omit for
    /// freshness.
    pub use_cache: bool,
}

impl ReadOptions {
    pub fn new(mode: ReadMode) -> Self {
        Self {
            mode,
            use_cache: false,
        }
    }

    pub fn cached(mode: ReadMode) -> Self {
        Self {
            mode,
            use_cache: true,
        }
    }
}

/// Public orchestrator over one workspace's configuration.
pub struct ConfigStore<S: StorageBackend> {
    storage: S,
    workspace_root: PathBuf,

    /// Override for the home directory (used for testing). When `None`,
    /// the platform home directory is used via `dirs::home_dir()`.
    home_dir_override: Option<PathBuf>,

    write_filter: WriteFilter,
    cache: ConfigCache,
}

impl<S: StorageBackend> ConfigStore<S> {
    /// Create a store for the given workspace root.
    pub fn new(storage: S, workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            workspace_root: workspace_root.into(),
            home_dir_override: None,
            write_filter: WriteFilter::all(),
            cache: ConfigCache::new(),
        }
    }

    /// Create a store with a custom home directory.
    ///
    /// This is primarily useful for testing, where the home-scope
    /// override location must be controlled without touching the real
    /// user home.
    pub fn with_home_dir(
        storage: S,
        workspace_root: impl Into<PathBuf>,
        home_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            home_dir_override: Some(home_dir.into()),
            ..Self::new(storage, workspace_root)
        }
    }

    /// Restrict write-back subtraction to specific field paths.
    pub fn with_write_filter(mut self, filter: WriteFilter) -> Self {
        self.write_filter = filter;
        self
    }

    /// The workspace root this store operates on.
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_override.clone().or_else(dirs::home_dir)
    }

    fn base_location(&self) -> ConfigLocation {
        constants::base_config(&self.workspace_root)
    }

    /// Generate the schema defaults and persist them as the base config.
    ///
    /// An existing base file is overwritten; `create` means "reset to
    /// defaults and persist". Returns the persisted config.
    pub async fn create(&mut self) -> Result<NotebookConfig> {
        let location = self.base_location();
        let config = NotebookConfig::default();

        let value = config.to_value().map_err(|e| ConfigError::Persist {
            path: location.path(),
            message: e.to_string(),
        })?;
        let content = codec::encode(&PartialConfig::new(value), &location)?;

        tracing::debug!(%location, "Creating base config from defaults");
        self.storage
            .write_text(&location, &content)
            .await
            .map_err(|e| ConfigError::Persist {
                path: location.path(),
                message: e.to_string(),
            })?;

        self.cache.clear();
        Ok(config)
    }

    /// Read and decode the base config, byte-faithful.
    ///
    /// No defaults are injected and no overrides are applied; the result
    /// is exactly what the persisted document defines.
    pub async fn read_raw(&self) -> Result<PartialConfig> {
        let location = self.base_location();
        let content = self
            .storage
            .read_text(&location)
            .await
            .map_err(|e| match e {
                err if err.is_not_found() => ConfigError::ConfigMissing {
                    path: location.path(),
                },
                err => ConfigError::Read {
                    path: location.path(),
                    message: err.to_string(),
                },
            })?;

        codec::decode(&content, &location)
    }

    /// Resolve the configuration for the requested mode.
    ///
    /// A missing base file is fatal here: `read` never creates. On a
    /// cache hit the snapshot is returned even if the underlying files
    /// have since changed or disappeared.
    pub async fn read(&mut self, options: ReadOptions) -> Result<NotebookConfig> {
        if options.use_cache {
            if let Some(hit) = self.cache.get(options.mode) {
                tracing::debug!(mode = ?options.mode, "Serving cached config");
                return Ok(hit.clone());
            }
        }

        let raw = self.read_raw().await?;

        let layered = match options.mode {
            ReadMode::Default => raw,
            ReadMode::Override => {
                let overrides = self.resolve_override().await?;
                merge::merge_override(raw, overrides)
            }
        };

        let location = self.base_location();
        let resolved = merge::merge_defaults(&layered, NotebookConfig::default()).map_err(|e| {
            ConfigError::Parse {
                path: location.path(),
                message: e.to_string(),
            }
        })?;

        self.cache.insert(options.mode, resolved.clone());
        Ok(resolved)
    }

    /// Persist `config`, minus every field the override layer owns.
    ///
    /// The base file stays the residual after subtracting override-owned
    /// fields, so an override-controlled value is never duplicated into
    /// it. Clears the cache. Returns the persisted partial.
    pub async fn write(&mut self, config: &NotebookConfig) -> Result<PartialConfig> {
        let location = self.base_location();
        let overrides = self.resolve_override().await?;

        let value = config.to_value().map_err(|e| ConfigError::Persist {
            path: location.path(),
            message: e.to_string(),
        })?;
        let residual = merge::subtract_overrides(value, &overrides, &self.write_filter);

        let content = codec::encode(&residual, &location)?;
        tracing::debug!(%location, "Persisting base config");
        self.storage
            .write_text(&location, &content)
            .await
            .map_err(|e| ConfigError::Persist {
                path: location.path(),
                message: e.to_string(),
            })?;

        self.cache.clear();
        Ok(residual)
    }

    /// Compute the current override partial for this workspace.
    pub async fn resolve_override(&self) -> Result<PartialConfig> {
        let resolver = OverrideResolver::new(&self.storage);
        resolver
            .resolve(&self.workspace_root, self.home_dir().as_deref())
            .await
    }

    /// Check if the base config exists.
    pub async fn has_config(&self) -> bool {
        self.storage.exists(&self.base_location()).await
    }

    /// Check if a workspace-scope override exists.
    pub async fn has_workspace_override(&self) -> bool {
        self.storage
            .exists(&constants::workspace_override(&self.workspace_root))
            .await
    }

    /// Check if a home-scope override exists.
    pub async fn has_home_override(&self) -> bool {
        match self.home_dir() {
            Some(dir) => self.storage.exists(&constants::home_override(dir)).await,
            None => false,
        }
    }
}
