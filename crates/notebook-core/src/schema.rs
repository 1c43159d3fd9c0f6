//! Configuration schema and defaults
//!
//! [`NotebookConfig`] is the fully-populated configuration tree: every
//! recognized field has a concrete value. `NotebookConfig::default()` is
//! the schema-complete default set; resolution never produces a config
//! with holes.
//!
//! [`PartialConfig`] is the layer representation: a document tree where
//! any field, at any depth, may be absent. Presence of a key with an
//! explicit falsy value (`false`, `[]`, `""`, `null`) is distinguishable
//! from absence of the key, which is what the merge and write-back
//! filtering rules operate on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_version() -> u32 {
    1
}

fn default_daily_domain() -> String {
    "daily".to_string()
}

fn default_date_format() -> String {
    "y.MM.dd".to_string()
}

fn default_embed_depth() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A single vault (note collection) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    /// Path of the vault directory, relative to the workspace root.
    pub fs_path: String,

    /// Display name; the fsPath stem is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sync behavior for this vault ("skip", "noCommit", "sync").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<String>,
}

impl VaultEntry {
    pub fn new(fs_path: impl Into<String>) -> Self {
        Self {
            fs_path: fs_path.into(),
            name: None,
            sync_mode: None,
        }
    }
}

/// Journal settings within the workspace section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSettings {
    /// Note hierarchy that daily journal notes are created under.
    #[serde(default = "default_daily_domain")]
    pub daily_domain: String,

    /// Date token pattern appended to journal note names.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            daily_domain: default_daily_domain(),
            date_format: default_date_format(),
        }
    }
}

/// Workspace-behavior settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    #[serde(default)]
    pub journal: JournalSettings,

    /// Persist notes automatically on edit.
    #[serde(default)]
    pub enable_autosave: bool,
}

/// Preview pane settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSettings {
    /// Maximum depth for recursively embedded notes.
    #[serde(default = "default_embed_depth")]
    pub embed_depth: u32,

    /// Open the preview pane when a note is opened.
    #[serde(default)]
    pub automatically_show: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            embed_depth: default_embed_depth(),
            automatically_show: false,
        }
    }
}

/// Developer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub enable_telemetry: bool,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            enable_telemetry: false,
        }
    }
}

/// The fully-resolved configuration tree.
///
/// Produced by `ConfigStore::read` after merging the persisted base
/// content, any overrides, and the schema defaults. Pure and
/// deterministic to construct; `default()` does no I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub vaults: Vec<VaultEntry>,

    #[serde(default)]
    pub workspace: WorkspaceSettings,

    #[serde(default)]
    pub preview: PreviewSettings,

    #[serde(default)]
    pub dev: DevSettings,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            vaults: Vec::new(),
            workspace: WorkspaceSettings::default(),
            preview: PreviewSettings::default(),
            dev: DevSettings::default(),
        }
    }
}

impl NotebookConfig {
    /// Convert to the merge-tree representation.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// A configuration tree where any field may be absent.
///
/// Backed by a JSON object tree; a key that is missing from a map is
/// "absent", a key mapped to any value (including `null`) is "present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialConfig(Value);

impl PartialConfig {
    /// The empty document: no field is present.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Wrap a merge-tree value. Non-object values carry no fields and
    /// are replaced by the empty document.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(_) => Self(value),
            _ => Self::empty(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether no field is present at all.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            _ => true,
        }
    }

    /// Look up a field by dot-separated path. Numeric segments index
    /// into sequences.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for part in path.split('.') {
            current = match current {
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }
}

impl Default for PartialConfig {
    fn default() -> Self {
        Self::empty()
    }
}
