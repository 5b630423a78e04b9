//! Candidate runner registry
//!
//! An ordered list of the runners the CLI knows how to drive. Order encodes
//! probe priority: when no preference matches, the first installed runner
//! in this order wins.

use std::collections::HashSet;
use std::sync::Arc;

use crate::common::{Config, Error, Result};
use crate::terminal::Terminal;

use super::ava::AvaRunner;
use super::jest::JestRunner;
use super::mocha::MochaRunner;
use super::TestRunner;

/// Ordered set of candidate runners
pub struct Registry {
    runners: Vec<Arc<dyn TestRunner>>,
}

impl Registry {
    /// Build a registry from an ordered candidate list
    ///
    /// Rejects duplicate names: the resolver returns the first name match,
    /// so a duplicate would shadow later entries silently.
    pub fn new(runners: Vec<Arc<dyn TestRunner>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for runner in &runners {
            if !seen.insert(runner.name()) {
                return Err(Error::duplicate_runner(runner.name()));
            }
        }
        Ok(Self { runners })
    }

    /// All supported runners wired with their collaborators, in priority
    /// order: jest, mocha, ava
    pub fn builtin(config: Arc<Config>, terminal: Arc<Terminal>) -> Self {
        Self {
            runners: vec![
                Arc::new(JestRunner::new(config.clone(), terminal.clone())),
                Arc::new(MochaRunner::new(config.clone(), terminal.clone())),
                Arc::new(AvaRunner::new(config, terminal)),
            ],
        }
    }

    /// Candidates in priority order
    pub fn runners(&self) -> &[Arc<dyn TestRunner>] {
        &self.runners
    }
}
