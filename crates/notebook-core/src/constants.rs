//! Well-known file names for the persisted configuration layout

use std::path::Path;

use notebook_fs::ConfigLocation;

/// Base configuration file, at the workspace root.
pub const CONFIG_FILE: &str = "notebook.yml";

/// Override file name, shared by the workspace and home scopes.
pub const OVERRIDE_FILE: &str = ".notebookrc.yml";

/// Location of the base config for a workspace.
pub fn base_config(workspace_root: impl AsRef<Path>) -> ConfigLocation {
    ConfigLocation::new(workspace_root.as_ref(), CONFIG_FILE)
}

/// Location of the workspace-scope override for a workspace.
pub fn workspace_override(workspace_root: impl AsRef<Path>) -> ConfigLocation {
    ConfigLocation::new(workspace_root.as_ref(), OVERRIDE_FILE)
}

/// Location of the home-scope override for a home directory.
pub fn home_override(home_dir: impl AsRef<Path>) -> ConfigLocation {
    ConfigLocation::new(home_dir.as_ref(), OVERRIDE_FILE)
}
