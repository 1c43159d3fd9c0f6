//! Error types for notebook-core

use std::path::PathBuf;

/// Result type for notebook-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while resolving or persisting configuration
///
/// Every variant carries the concrete path the operation was attempted
/// on, so a misconfigured workspace is diagnosable from the message.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Base config location unreadable
    #[error("Failed to read config at {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Base config absent when an operation requires it
    #[error("Configuration not found at {path}")]
    ConfigMissing { path: PathBuf },

    /// Malformed YAML at a consulted location
    #[error("Failed to parse YAML config at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Write to storage failed
    #[error("Failed to persist config at {path}: {message}")]
    Persist { path: PathBuf, message: String },
}

impl ConfigError {
    /// The path the failing operation was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. }
            | Self::ConfigMissing { path }
            | Self::Parse { path, .. }
            | Self::Persist { path, .. } => path,
        }
    }
}
