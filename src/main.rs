//! jstest - run a JavaScript project's tests with whatever framework it uses
//!
//! Detects which supported test framework (jest, mocha, ava) a project has
//! installed, or honors an explicit preference, and drives it from the
//! command line.

use std::sync::Arc;

use clap::Parser;
use jstest::commands::Commands;
use jstest::terminal::Terminal;
use jstest::{cli, common};

#[derive(Parser)]
#[command(name = "jstest", about = "Detects and runs a project's JavaScript test framework")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    // One terminal for the whole process; every constructed runner shares it.
    let terminal = Arc::new(Terminal::new());

    if let Err(e) = cli::dispatch(cli.command, terminal).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
