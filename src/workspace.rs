//! Workspace root handling
//!
//! A workspace is the directory holding a project's package.json. The
//! resolver only ever reads the path; it never writes into the workspace.

use std::path::{Path, PathBuf};

/// Root directory of a JavaScript project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    path: PathBuf,
}

impl WorkspaceRoot {
    /// Wrap an explicit directory as the workspace root
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Find the workspace root containing `start`
    ///
    /// Walks up from `start` to the nearest ancestor with a package.json.
    /// Returns None when no ancestor has one.
    pub fn discover(start: &Path) -> Option<Self> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            if current.join("package.json").exists() {
                return Some(Self::new(current));
            }
            dir = current.parent();
        }
        None
    }

    /// The workspace's filesystem path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
