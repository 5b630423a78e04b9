//! Mocha runner

use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{Config, Result};
use crate::terminal::Terminal;
use crate::workspace::WorkspaceRoot;

use super::{invoke, node_modules_bin, TestRunner, TestScope};

pub struct MochaRunner {
    config: Arc<Config>,
    terminal: Arc<Terminal>,
}

impl MochaRunner {
    pub fn new(config: Arc<Config>, terminal: Arc<Terminal>) -> Self {
        Self { config, terminal }
    }
}

#[async_trait]
impl TestRunner for MochaRunner {
    fn name(&self) -> &'static str {
        "mocha"
    }

    fn bin_path(&self) -> PathBuf {
        node_modules_bin("mocha")
    }

    fn args(&self, scope: &TestScope) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(file) = &scope.file {
            args.push(file.display().to_string());
        }
        if let Some(name) = &scope.test_name {
            args.push("--grep".to_string());
            args.push(name.clone());
        }
        args.extend(self.config.runner_args(self.name()).iter().cloned());
        args
    }

    async fn run(&self, workspace: &WorkspaceRoot, scope: &TestScope) -> Result<ExitStatus> {
        invoke(self, &self.config, &self.terminal, workspace, scope).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_name_uses_grep_flag() {
        let runner = MochaRunner::new(Arc::new(Config::default()), Arc::new(Terminal::new()));
        let scope = TestScope {
            file: Some(PathBuf::from("test/app.spec.js")),
            test_name: Some("parses input".to_string()),
        };
        assert_eq!(
            runner.args(&scope),
            ["test/app.spec.js", "--grep", "parses input"]
        );
    }
}
