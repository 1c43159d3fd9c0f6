//! Override resolution
//!
//! Locates and parses the two override files and computes a
//! precedence-ordered partial: workspace-scope beats home-scope, field
//! by field. Absence of either file (or of both) is a normal condition;
//! malformed content is not.

use std::path::Path;

use notebook_fs::{ConfigLocation, StorageBackend};

use crate::codec;
use crate::constants;
use crate::error::{ConfigError, Result};
use crate::merge::merge_override;
use crate::schema::PartialConfig;

/// Resolves the override layers through an injected storage backend.
pub struct OverrideResolver<'a, S: StorageBackend> {
    storage: &'a S,
}

impl<'a, S: StorageBackend> OverrideResolver<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Resolve the override partial for a workspace.
    ///
    /// Both layers are attempted independently; a malformed workspace
    /// layer is reported in preference to a malformed home layer, but
    /// neither aborts the attempt on the other. When `home_dir` is
    /// `None` only the workspace layer is consulted.
    pub async fn resolve(
        &self,
        workspace_root: &Path,
        home_dir: Option<&Path>,
    ) -> Result<PartialConfig> {
        let workspace_layer = self
            .load_layer(&constants::workspace_override(workspace_root))
            .await;
        let home_layer = match home_dir {
            Some(dir) => self.load_layer(&constants::home_override(dir)).await,
            None => Ok(None),
        };

        let workspace_layer = workspace_layer?;
        let home_layer = home_layer?;

        Ok(match (home_layer, workspace_layer) {
            (Some(home), Some(workspace)) => merge_override(home, workspace),
            (Some(home), None) => home,
            (None, Some(workspace)) => workspace,
            (None, None) => PartialConfig::empty(),
        })
    }

    /// Load one override layer.
    ///
    /// A missing or unreadable file means the layer is absent; malformed
    /// content is an error for the whole resolution.
    async fn load_layer(&self, location: &ConfigLocation) -> Result<Option<PartialConfig>> {
        let content = match self.storage.read_text(location).await {
            Ok(content) => content,
            Err(err) if err.is_not_found() => {
                tracing::debug!(%location, "No override file found — skipping layer");
                return Ok(None);
            }
            Err(err) => {
                tracing::warn!(%location, %err, "Override file unreadable — skipping layer");
                return Ok(None);
            }
        };

        tracing::debug!(%location, "Loading override layer");
        match codec::decode(&content, location) {
            Ok(partial) => Ok(Some(partial)),
            Err(err @ ConfigError::Parse { .. }) => {
                tracing::warn!(%location, %err, "Malformed override file");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
