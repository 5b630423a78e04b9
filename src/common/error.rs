//! Error types for the test runner CLI
//!
//! Error messages are written to be actionable from a terminal: when no
//! runner can be found the message says what to install.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test runner CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Resolution Errors ===
    #[error("No test runner found in your project. Please install one (jest, mocha, or ava), or set 'runner' in jstest.toml")]
    NoRunnerAvailable,

    #[error("Duplicate runner name '{name}' in registry")]
    DuplicateRunner { name: String },

    // === Execution Errors ===
    #[error("Node.js not found in PATH. Test runners are Node.js programs - install Node.js first")]
    NodeNotFound,

    #[error("Failed to start '{name}': {source}")]
    SpawnFailed {
        name: String,
        #[source]
        source: io::Error,
    },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a duplicate runner error
    pub fn duplicate_runner(name: &str) -> Self {
        Self::DuplicateRunner {
            name: name.to_string(),
        }
    }

    /// Create a spawn failed error
    pub fn spawn_failed(name: &str, source: io::Error) -> Self {
        Self::SpawnFailed {
            name: name.to_string(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
