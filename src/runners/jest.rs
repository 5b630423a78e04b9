//! Jest runner

use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{Config, Result};
use crate::terminal::Terminal;
use crate::workspace::WorkspaceRoot;

use super::{invoke, node_modules_bin, TestRunner, TestScope};

pub struct JestRunner {
    config: Arc<Config>,
    terminal: Arc<Terminal>,
}

impl JestRunner {
    pub fn new(config: Arc<Config>, terminal: Arc<Terminal>) -> Self {
        Self { config, terminal }
    }
}

#[async_trait]
impl TestRunner for JestRunner {
    fn name(&self) -> &'static str {
        "jest"
    }

    fn bin_path(&self) -> PathBuf {
        node_modules_bin("jest")
    }

    fn args(&self, scope: &TestScope) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(file) = &scope.file {
            args.push(file.display().to_string());
        }
        if let Some(name) = &scope.test_name {
            args.push("-t".to_string());
            args.push(name.clone());
        }
        args.extend(self.config.runner_args(self.name()).iter().cloned());
        args
    }

    async fn run(&self, workspace: &WorkspaceRoot, scope: &TestScope) -> Result<ExitStatus> {
        invoke(self, &self.config, &self.terminal, workspace, scope).await
    }
}
