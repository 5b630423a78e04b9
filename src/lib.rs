//! jstest - JavaScript test runner detection and invocation
//!
//! Selects which supported test framework (jest, mocha, ava) should run a
//! project's tests: an explicit configured preference wins outright,
//! otherwise the installed frameworks are probed in priority order.

pub mod cli;
pub mod commands;
pub mod common;
pub mod runners;
pub mod terminal;
pub mod workspace;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use runners::registry::Registry;
pub use runners::resolver::resolve;
pub use runners::{TestRunner, TestScope};
pub use terminal::Terminal;
pub use workspace::WorkspaceRoot;
