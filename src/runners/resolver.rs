//! Runner resolution
//!
//! Picks exactly one runner for a workspace in two phases: an explicit
//! configured preference wins outright, otherwise the candidates are probed
//! on disk in registry order and the first installed one wins.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use crate::common::{Error, Result};
use crate::workspace::WorkspaceRoot;

use super::registry::Registry;
use super::TestRunner;

/// Select the runner to use for a workspace
///
/// A non-empty `preference` naming a known runner is trusted without
/// checking that its binary exists, so configuration can point at tools
/// installed outside node_modules/.bin. With no usable preference the
/// candidates are probed sequentially in registry order; probing stops at
/// the first runner whose shim exists.
///
/// Fails with [`Error::NoRunnerAvailable`] when both phases exhaust the
/// candidate list.
pub async fn resolve(
    registry: &Registry,
    workspace: &WorkspaceRoot,
    preference: Option<&str>,
) -> Result<Arc<dyn TestRunner>> {
    resolve_with_probe(registry, workspace, preference, file_exists).await
}

/// Whether a runner's shim is present in the workspace
///
/// Status check used by `jstest list`; the resolver itself goes through
/// [`resolve`].
pub async fn is_installed(workspace: &WorkspaceRoot, runner: &dyn TestRunner) -> bool {
    file_exists(workspace.path().join(runner.bin_path())).await
}

/// Resolution with an injectable existence probe, for probe-order and
/// call-count tests
async fn resolve_with_probe<F, Fut>(
    registry: &Registry,
    workspace: &WorkspaceRoot,
    preference: Option<&str>,
    probe: F,
) -> Result<Arc<dyn TestRunner>>
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = bool>,
{
    // Phase 1: a configured preference wins without touching the filesystem.
    if let Some(name) = preference.filter(|name| !name.is_empty()) {
        for runner in registry.runners() {
            if runner.name() == name {
                tracing::debug!(runner = name, "using configured runner");
                return Ok(runner.clone());
            }
        }
        tracing::debug!(runner = name, "configured runner is unknown, probing instead");
    }

    // Phase 2: sequential probes in priority order. Candidate i+1 is only
    // checked after candidate i came up empty.
    for runner in registry.runners() {
        let shim = workspace.path().join(runner.bin_path());
        if probe(shim).await {
            tracing::debug!(runner = runner.name(), "found installed runner");
            return Ok(runner.clone());
        }
    }

    Err(Error::NoRunnerAvailable)
}

/// Non-throwing existence check
///
/// Probe failures (permissions, broken symlinks, a file where a directory
/// was expected) count as "not installed" so one bad candidate cannot abort
/// resolution.
async fn file_exists(path: PathBuf) -> bool {
    tokio::fs::try_exists(&path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::test_support::StubRunner;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn stub_registry() -> Registry {
        Registry::new(vec![
            Arc::new(StubRunner {
                name: "jest",
                bin: "node_modules/.bin/jest",
            }),
            Arc::new(StubRunner {
                name: "mocha",
                bin: "node_modules/.bin/mocha",
            }),
            Arc::new(StubRunner {
                name: "ava",
                bin: "node_modules/.bin/ava",
            }),
        ])
        .unwrap()
    }

    fn workspace() -> WorkspaceRoot {
        WorkspaceRoot::new("/project")
    }

    /// Probe that records every path it is asked about, answering true for
    /// the given shim names
    struct RecordingProbe {
        existing: HashSet<PathBuf>,
        calls: Mutex<Vec<PathBuf>>,
    }

    impl RecordingProbe {
        fn new(existing: &[&str]) -> Self {
            let root = workspace();
            Self {
                existing: existing
                    .iter()
                    .map(|bin| root.path().join(bin))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        async fn probe(&self, path: PathBuf) -> bool {
            self.calls.lock().unwrap().push(path.clone());
            self.existing.contains(&path)
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[tokio::test]
    async fn test_preference_wins_without_probing() {
        let registry = stub_registry();
        let probe = RecordingProbe::new(&[]);

        let selected = resolve_with_probe(&registry, &workspace(), Some("ava"), |p| {
            probe.probe(p)
        })
        .await
        .unwrap();

        // Nothing exists on disk; the preference is trusted anyway.
        assert_eq!(selected.name(), "ava");
        assert_eq!(probe.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_preference_falls_through_to_probing() {
        let registry = stub_registry();
        let probe = RecordingProbe::new(&["node_modules/.bin/mocha"]);

        let selected = resolve_with_probe(&registry, &workspace(), Some("pytest"), |p| {
            probe.probe(p)
        })
        .await
        .unwrap();

        assert_eq!(selected.name(), "mocha");
    }

    #[tokio::test]
    async fn test_empty_preference_is_no_preference() {
        let registry = stub_registry();
        let probe = RecordingProbe::new(&["node_modules/.bin/jest"]);

        let selected = resolve_with_probe(&registry, &workspace(), Some(""), |p| {
            probe.probe(p)
        })
        .await
        .unwrap();

        assert_eq!(selected.name(), "jest");
    }

    #[tokio::test]
    async fn test_first_installed_candidate_wins_and_short_circuits() {
        let registry = stub_registry();
        let probe =
            RecordingProbe::new(&["node_modules/.bin/jest", "node_modules/.bin/mocha"]);

        let selected = resolve_with_probe(&registry, &workspace(), None, |p| probe.probe(p))
            .await
            .unwrap();

        assert_eq!(selected.name(), "jest");
        // jest matched first, so mocha and ava were never probed
        assert_eq!(probe.call_count(), 1);
    }

    #[tokio::test]
    async fn test_probes_run_in_registry_order() {
        let registry = stub_registry();
        let probe = RecordingProbe::new(&["node_modules/.bin/mocha"]);

        let selected = resolve_with_probe(&registry, &workspace(), None, |p| probe.probe(p))
            .await
            .unwrap();

        assert_eq!(selected.name(), "mocha");
        let calls = probe.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                workspace().path().join("node_modules/.bin/jest"),
                workspace().path().join("node_modules/.bin/mocha"),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_candidate_found_is_an_error() {
        let registry = stub_registry();
        let probe = RecordingProbe::new(&[]);

        let result =
            resolve_with_probe(&registry, &workspace(), None, |p| probe.probe(p)).await;

        assert!(matches!(result, Err(Error::NoRunnerAvailable)));
        // Every candidate was given a chance before giving up.
        assert_eq!(probe.call_count(), 3);
    }

    #[tokio::test]
    async fn test_probe_error_counts_as_not_installed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blocker");
        std::fs::write(&file, "").unwrap();

        // A path routed through a regular file errors with ENOTDIR rather
        // than plain not-found; it must still read as absent.
        assert!(!file_exists(file.join("node_modules/.bin/jest")).await);
    }

    #[tokio::test]
    async fn test_resolve_uses_real_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("node_modules").join(".bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("mocha"), "").unwrap();

        let registry = stub_registry();
        let selected = resolve(&registry, &WorkspaceRoot::new(dir.path()), None)
            .await
            .unwrap();

        assert_eq!(selected.name(), "mocha");
    }
}
