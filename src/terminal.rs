//! Terminal execution facility
//!
//! Runs test runner binaries inside the workspace with inherited stdio, so
//! the runner's own reporter output goes straight to the user's terminal.
//! One instance is created at process start and shared by every runner.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use crate::common::{Error, Result};

/// Shared process-execution facility for test runners
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Run a program in `cwd` and wait for it to finish
    ///
    /// `name` is the runner name, used for error reporting. Stdio is
    /// inherited; the caller decides what to do with the exit status.
    pub async fn run(
        &self,
        name: &str,
        cwd: &Path,
        program: &Path,
        args: &[String],
        env: &HashMap<String, String>,
    ) -> Result<ExitStatus> {
        tracing::debug!(runner = name, program = %program.display(), "spawning test runner");

        let mut command = build_command(program);
        command
            .args(args)
            .current_dir(cwd)
            .envs(env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| spawn_error(name, e))?;
        let status = child.wait().await?;

        tracing::debug!(runner = name, code = ?status.code(), "test runner exited");
        Ok(status)
    }
}

/// Build the platform command for a runner script
///
/// The shims in node_modules/.bin are shell scripts on Unix and .cmd files
/// on Windows; the latter only run through cmd.exe.
fn build_command(program: &Path) -> tokio::process::Command {
    if cfg!(windows) {
        let mut command = tokio::process::Command::new("cmd");
        command.arg("/C").arg(program);
        command
    } else {
        tokio::process::Command::new(program)
    }
}

/// Map a spawn failure to something actionable
///
/// Runner shims need Node.js; when the spawn fails and node itself is
/// missing from PATH, that is the real problem to report.
fn spawn_error(name: &str, error: io::Error) -> Error {
    if error.kind() == io::ErrorKind::NotFound && which::which("node").is_err() {
        return Error::NodeNotFound;
    }
    Error::spawn_failed(name, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_exit_status() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), "fake-runner", "exit 3");

        let terminal = Terminal::new();
        let status = terminal
            .run("fake", dir.path(), &script, &[], &HashMap::new())
            .await
            .unwrap();

        assert_eq!(status.code(), Some(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_passes_args_env_and_cwd() {
        let dir = tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "fake-runner",
            r#"printf '%s %s %s' "$1" "$FAKE_VAR" "$(pwd)" > out.txt"#,
        );

        let terminal = Terminal::new();
        let env = HashMap::from([("FAKE_VAR".to_string(), "hello".to_string())]);
        let status = terminal
            .run(
                "fake",
                dir.path(),
                &script,
                &["--flag".to_string()],
                &env,
            )
            .await
            .unwrap();
        assert!(status.success());

        let out = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert!(out.starts_with("--flag hello"));
        let cwd = out.rsplit(' ').next().unwrap();
        assert_eq!(
            std::fs::canonicalize(cwd).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-runner");

        let terminal = Terminal::new();
        let result = terminal
            .run("fake", dir.path(), &missing, &[], &HashMap::new())
            .await;

        assert!(matches!(
            result,
            Err(Error::SpawnFailed { .. }) | Err(Error::NodeNotFound)
        ));
    }
}
