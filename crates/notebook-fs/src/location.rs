//! Logical locations for configuration documents
//!
//! A [`ConfigLocation`] names a configuration file as a (root directory,
//! file name) pair. The engine works with three such locations: the base
//! config at the workspace root, the workspace override next to it, and
//! the home override in the user's home directory.

use std::fmt;
use std::path::{Path, PathBuf};

/// A (root directory, file name) pair identifying a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLocation {
    root: PathBuf,
    file_name: String,
}

impl ConfigLocation {
    /// Create a location for `file_name` under `root`.
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    /// The directory the file lives in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file name within the root directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The full path of the file.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}
