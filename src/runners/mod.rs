//! Test runner abstractions
//!
//! Every supported JavaScript test framework is a [`TestRunner`]: it knows
//! its stable name, where its shim lives inside a project, and how to build
//! and execute a command line for a given scope. Selection between runners
//! lives in [`resolver`]; the ordered candidate set lives in [`registry`].

pub mod ava;
pub mod jest;
pub mod mocha;
pub mod registry;
pub mod resolver;

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;

use crate::common::{Config, Result};
use crate::terminal::Terminal;
use crate::workspace::WorkspaceRoot;

/// What to run: the whole suite, one file, and/or tests matching a title
#[derive(Debug, Clone, Default)]
pub struct TestScope {
    /// Test file to run; None runs the runner's whole suite
    pub file: Option<PathBuf>,
    /// Test title filter, passed through the tool's own matching flag
    pub test_name: Option<String>,
}

/// Capability contract every supported test framework satisfies
///
/// `name` and `bin_path` are all the resolver depends on; `run` is what the
/// rest of the CLI needs from a selected runner.
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Stable identifier ("jest", "mocha", "ava")
    fn name(&self) -> &'static str;

    /// Path, relative to the workspace root, whose existence indicates the
    /// tool is installed
    fn bin_path(&self) -> PathBuf;

    /// Command-line arguments for running `scope` with this tool
    fn args(&self, scope: &TestScope) -> Vec<String>;

    /// Run the tool against the workspace and return its exit status
    async fn run(&self, workspace: &WorkspaceRoot, scope: &TestScope) -> Result<ExitStatus>;
}

/// Platform name of a node_modules/.bin shim
fn script_name(base: &str) -> String {
    if cfg!(windows) {
        format!("{base}.cmd")
    } else {
        base.to_string()
    }
}

/// Relative shim path for a tool installed in node_modules
fn node_modules_bin(base: &str) -> PathBuf {
    Path::new("node_modules")
        .join(".bin")
        .join(script_name(base))
}

/// Shared run body used by every runner
async fn invoke(
    runner: &dyn TestRunner,
    config: &Config,
    terminal: &Terminal,
    workspace: &WorkspaceRoot,
    scope: &TestScope,
) -> Result<ExitStatus> {
    let program = workspace.path().join(runner.bin_path());
    terminal
        .run(
            runner.name(),
            workspace.path(),
            &program,
            &runner.args(scope),
            &config.env,
        )
        .await
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Inert runner for resolution tests; never executed
    pub(crate) struct StubRunner {
        pub name: &'static str,
        pub bin: &'static str,
    }

    #[async_trait]
    impl TestRunner for StubRunner {
        fn name(&self) -> &'static str {
            self.name
        }

        fn bin_path(&self) -> PathBuf {
            PathBuf::from(self.bin)
        }

        fn args(&self, _scope: &TestScope) -> Vec<String> {
            Vec::new()
        }

        async fn run(
            &self,
            _workspace: &WorkspaceRoot,
            _scope: &TestScope,
        ) -> Result<ExitStatus> {
            unreachable!("stub runners are never executed")
        }
    }
}
