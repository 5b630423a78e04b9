//! Configuration file handling
//!
//! A workspace may carry a `jstest.toml` next to its package.json; a global
//! `config.toml` in the platform config directory serves as fallback. The
//! configuration is read-only for the resolver: it supplies the optional
//! runner preference, per-runner extra arguments, and environment variables.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::paths::{config_path, workspace_config_path};
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Explicit runner preference ("jest", "mocha", "ava")
    ///
    /// Trusted without checking that the tool is installed, so a runner
    /// living outside node_modules/.bin can still be forced.
    #[serde(default)]
    pub runner: Option<String>,

    /// Per-runner settings, keyed by runner name
    #[serde(default)]
    pub runners: HashMap<String, RunnerConfig>,

    /// Environment variables set for every test run
    #[serde(default)]
    pub env: HashMap<String, String>,
}

/// Settings for a single runner
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RunnerConfig {
    /// Extra arguments appended to every invocation of this runner
    #[serde(default)]
    pub args: Vec<String>,
}

impl Config {
    /// Load configuration for a workspace
    ///
    /// Reads `<workspace>/jstest.toml` if present, otherwise the global
    /// config file, otherwise returns defaults.
    pub fn load(workspace: &Path) -> Result<Self> {
        let workspace_file = workspace_config_path(workspace);
        if workspace_file.exists() {
            return Self::load_file(&workspace_file);
        }

        if let Some(global) = config_path() {
            if global.exists() {
                return Self::load_file(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load and parse a specific configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// The configured runner preference, if any
    ///
    /// An empty string in the config file means "no preference".
    pub fn preferred_runner(&self) -> Option<&str> {
        self.runner.as_deref().filter(|name| !name.is_empty())
    }

    /// Extra arguments configured for a runner
    pub fn runner_args(&self, name: &str) -> &[String] {
        self.runners
            .get(name)
            .map(|r| r.args.as_slice())
            .unwrap_or(&[])
    }
}
