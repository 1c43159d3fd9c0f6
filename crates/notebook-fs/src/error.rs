//! Error types for notebook-fs

use std::path::PathBuf;

/// Result type for notebook-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notebook-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Content at {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether this error means the target simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The path the failing operation was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::NotFound { path } | Self::InvalidUtf8 { path } => path,
        }
    }
}
