//! CLI command definitions
//!
//! Defines the clap commands for the test runner CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run tests with the project's test runner
    Run {
        /// Test file to run (default: the whole suite)
        file: Option<PathBuf>,

        /// Only run tests whose title matches this name
        #[arg(long = "test", short = 't')]
        test_name: Option<String>,

        /// Runner to use, overriding configuration and detection
        #[arg(long)]
        runner: Option<String>,

        /// Workspace directory (default: discovered from the current directory)
        #[arg(long = "dir", short = 'C')]
        dir: Option<PathBuf>,
    },

    /// Show which runner would be used for this workspace
    Detect {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Workspace directory (default: discovered from the current directory)
        #[arg(long = "dir", short = 'C')]
        dir: Option<PathBuf>,
    },

    /// List supported runners and whether each is installed here
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Workspace directory (default: discovered from the current directory)
        #[arg(long = "dir", short = 'C')]
        dir: Option<PathBuf>,
    },
}
