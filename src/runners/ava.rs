//! Ava runner

use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{Config, Result};
use crate::terminal::Terminal;
use crate::workspace::WorkspaceRoot;

use super::{invoke, node_modules_bin, TestRunner, TestScope};

pub struct AvaRunner {
    config: Arc<Config>,
    terminal: Arc<Terminal>,
}

impl AvaRunner {
    pub fn new(config: Arc<Config>, terminal: Arc<Terminal>) -> Self {
        Self { config, terminal }
    }
}

#[async_trait]
impl TestRunner for AvaRunner {
    fn name(&self) -> &'static str {
        "ava"
    }

    fn bin_path(&self) -> PathBuf {
        node_modules_bin("ava")
    }

    fn args(&self, scope: &TestScope) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(file) = &scope.file {
            args.push(file.display().to_string());
        }
        if let Some(name) = &scope.test_name {
            args.push("--match".to_string());
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
    fn test_test_name_uses_match_flag() {
        let runner = AvaRunner::new(Arc::new(Config::default()), Arc::new(Terminal::new()));
        let scope = TestScope {
            file: None,
            test_name: Some("rejects bad input".to_string()),
        };
        assert_eq!(runner.args(&scope), ["--match", "rejects bad input"]);
    }
}
