//! Launch ordering, selectivity and failure-isolation tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use kickoff_core::{Project, Slug};
use kickoff_launcher::{
    launch, LaunchError, SessionKind, SessionRequest, SessionSpawner, SpawnError,
    COMPOSE_COMMAND, EDITOR_COMMAND,
};
use rstest::rstest;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Spawner doubles
// ---------------------------------------------------------------------------

/// Records requests; fails the kinds listed in `fail`.
#[derive(Default)]
struct RecordingSpawner {
    requests: Vec<SessionRequest>,
    fail: HashSet<SessionKind>,
}

impl RecordingSpawner {
    fn failing(kinds: &[SessionKind]) -> Self {
        Self {
            requests: Vec::new(),
            fail: kinds.iter().copied().collect(),
        }
    }

    fn kinds(&self) -> Vec<SessionKind> {
        self.requests.iter().map(|r| r.kind).collect()
    }
}

impl SessionSpawner for RecordingSpawner {
    fn spawn(&mut self, request: &SessionRequest) -> Result<(), SpawnError> {
        self.requests.push(request.clone());
        if self.fail.contains(&request.kind) {
            return Err(SpawnError::Rejected(format!("{} refused", request.kind)));
        }
        Ok(())
    }
}

fn project(root: &Path, startup: &str, nvim: bool, docker: bool) -> Project {
    Project {
        root_path: root.to_path_buf(),
        slug: Slug::from("api"),
        run_docker: docker,
        run_nvim: nvim,
        startup_commands: startup.to_string(),
    }
}

// ---------------------------------------------------------------------------
// 1. Ordering and selectivity
// ---------------------------------------------------------------------------

#[test]
fn all_behaviors_issue_three_requests_in_fixed_order() {
    let root = TempDir::new().expect("tempdir");
    let mut spawner = RecordingSpawner::default();

    let report = launch(&project(root.path(), "make dev", true, true), &mut spawner)
        .expect("launch");

    assert_eq!(
        spawner.kinds(),
        vec![SessionKind::Startup, SessionKind::Editor, SessionKind::Compose]
    );
    assert_eq!(spawner.requests[0].command, "make dev");
    assert_eq!(spawner.requests[0].title, "Workspace - api: make dev");
    assert_eq!(spawner.requests[1].command, EDITOR_COMMAND);
    assert_eq!(spawner.requests[2].command, COMPOSE_COMMAND);
    assert!(spawner
        .requests
        .iter()
        .all(|r| r.working_dir == root.path()));
    assert!(report.is_clean());
    assert_eq!(report.issued.len(), 3);
}

#[rstest]
#[case("", false, true, vec![SessionKind::Compose])]
#[case("", true, false, vec![SessionKind::Editor])]
#[case("npm start", false, false, vec![SessionKind::Startup])]
#[case("npm start", false, true, vec![SessionKind::Startup, SessionKind::Compose])]
#[case("", false, false, vec![])]
fn only_enabled_sessions_are_requested(
    #[case] startup: &str,
    #[case] nvim: bool,
    #[case] docker: bool,
    #[case] expected: Vec<SessionKind>,
) {
    let root = TempDir::new().expect("tempdir");
    let mut spawner = RecordingSpawner::default();
    launch(&project(root.path(), startup, nvim, docker), &mut spawner).expect("launch");
    assert_eq!(spawner.kinds(), expected);
}

// ---------------------------------------------------------------------------
// 2. Invalid root path
// ---------------------------------------------------------------------------

#[test]
fn missing_root_issues_nothing() {
    let root = TempDir::new().expect("tempdir");
    let missing = root.path().join("gone");
    let mut spawner = RecordingSpawner::default();

    let err = launch(&project(&missing, "make dev", true, true), &mut spawner).unwrap_err();

    assert!(matches!(err, LaunchError::InvalidRootPath { ref path, .. } if path == &missing));
    assert!(spawner.requests.is_empty());
}

#[test]
fn root_that_is_a_file_is_invalid() {
    let root = TempDir::new().expect("tempdir");
    let file = root.path().join("README");
    std::fs::write(&file, "x").expect("write");
    let mut spawner = RecordingSpawner::default();

    let err = launch(&project(&file, "", true, false), &mut spawner).unwrap_err();
    assert!(matches!(err, LaunchError::InvalidRootPath { .. }));
    assert!(spawner.requests.is_empty());
}

#[test]
fn nonexistent_srv_path_is_invalid() {
    let mut spawner = RecordingSpawner::default();
    let p = project(
        &PathBuf::from("/srv/kickoff-test-definitely-missing"),
        "",
        false,
        true,
    );
    let err = launch(&p, &mut spawner).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

// ---------------------------------------------------------------------------
// 3. Best-effort steps
// ---------------------------------------------------------------------------

#[test]
fn failed_step_does_not_abort_later_steps() {
    let root = TempDir::new().expect("tempdir");
    let mut spawner = RecordingSpawner::failing(&[SessionKind::Startup]);

    let report = launch(&project(root.path(), "make dev", true, true), &mut spawner)
        .expect("launch");

    assert_eq!(spawner.requests.len(), 3, "every step must still be attempted");
    assert_eq!(report.issued, vec![SessionKind::Editor, SessionKind::Compose]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        LaunchError::LaunchStepFailed { step: SessionKind::Startup, .. }
    ));
    assert!(!report.is_clean());
}

#[test]
fn every_step_failing_still_returns_a_report() {
    let root = TempDir::new().expect("tempdir");
    let mut spawner = RecordingSpawner::failing(&[
        SessionKind::Startup,
        SessionKind::Editor,
        SessionKind::Compose,
    ]);

    let report = launch(&project(root.path(), "make dev", true, true), &mut spawner)
        .expect("launch");
    assert!(report.issued.is_empty());
    assert_eq!(report.failures.len(), 3);
    let msg = report.failures[1].to_string();
    assert!(msg.contains("editor"), "got: {msg}");
}
