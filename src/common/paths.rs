//! Configuration file locations
//!
//! Workspace configuration lives next to the project's package.json; the
//! global fallback uses platform-appropriate directories.

use std::path::{Path, PathBuf};

/// Name of the workspace-level configuration file
pub const WORKSPACE_CONFIG_NAME: &str = "jstest.toml";

/// Get the global configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/jstest-cli/`
/// - macOS: `~/Library/Application Support/jstest-cli/`
/// - Windows: `%APPDATA%\jstest-cli\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "jstest-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the path to a workspace's configuration file
pub fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(WORKSPACE_CONFIG_NAME)
}
