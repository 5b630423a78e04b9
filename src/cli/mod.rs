//! CLI command handling
//!
//! Dispatches CLI commands: wires each one to a workspace, its
//! configuration, and the shared terminal, then formats output.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use crate::commands::Commands;
use crate::common::{Config, Result};
use crate::runners::registry::Registry;
use crate::runners::{resolver, TestScope};
use crate::terminal::Terminal;
use crate::workspace::WorkspaceRoot;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, terminal: Arc<Terminal>) -> Result<()> {
    match command {
        Commands::Run {
            file,
            test_name,
            runner,
            dir,
        } => {
            let workspace = locate_workspace(dir);
            let config = Arc::new(Config::load(workspace.path())?);
            let registry = Registry::builtin(config.clone(), terminal);

            // --runner beats the configured preference; both are trusted
            // without checking the tool is installed.
            let preference = runner.as_deref().or_else(|| config.preferred_runner());
            let selected = resolver::resolve(&registry, &workspace, preference).await?;

            tracing::info!(runner = selected.name(), "running tests");
            let scope = TestScope { file, test_name };
            let status = selected.run(&workspace, &scope).await?;

            if !status.success() {
                std::process::exit(status.code().unwrap_or(1));
            }
            Ok(())
        }

        Commands::Detect { json, dir } => {
            let workspace = locate_workspace(dir);
            let config = Arc::new(Config::load(workspace.path())?);
            let registry = Registry::builtin(config.clone(), terminal);

            let selected =
                resolver::resolve(&registry, &workspace, config.preferred_runner()).await?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "runner": selected.name(),
                        "bin": selected.bin_path(),
                        "workspace": workspace.path(),
                    })
                );
            } else {
                println!("{}", selected.name());
            }
            Ok(())
        }

        Commands::List { json, dir } => {
            let workspace = locate_workspace(dir);
            let config = Arc::new(Config::load(workspace.path())?);
            let registry = Registry::builtin(config.clone(), terminal);

            let mut rows = Vec::new();
            for runner in registry.runners() {
                let installed = resolver::is_installed(&workspace, runner.as_ref()).await;
                rows.push((runner.name(), runner.bin_path(), installed));
            }

            if json {
                let entries: Vec<_> = rows
                    .iter()
                    .map(|(name, bin, installed)| {
                        serde_json::json!({
                            "name": name,
                            "bin": bin,
                            "installed": installed,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (name, bin, installed) in rows {
                    let marker = if installed {
                        "✓".green()
                    } else {
                        "✗".red()
                    };
                    println!("  {} {:8} {}", marker, name, bin.display());
                }
            }
            Ok(())
        }
    }
}

/// Resolve the workspace root for a command
///
/// An explicit -C directory is taken as-is. Otherwise the nearest ancestor
/// of the current directory with a package.json; failing that, the current
/// directory itself (resolution will then report no runner).
fn locate_workspace(dir: Option<PathBuf>) -> WorkspaceRoot {
    if let Some(dir) = dir {
        return WorkspaceRoot::new(dir);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    WorkspaceRoot::discover(&cwd).unwrap_or_else(|| WorkspaceRoot::new(cwd))
}
