//! Turns a project into terminal sessions.
//!
//! Sessions are requested strictly in [`SessionKind`] order: startup command,
//! editor, container stack. Each request is best-effort: a failed spawn is
//! recorded and the next request is still issued. Nothing is retried or
//! rolled back.

use std::path::{Path, PathBuf};

use kickoff_core::Project;

use crate::error::LaunchError;
use crate::session::{SessionKind, SessionRequest, COMPOSE_COMMAND, EDITOR_COMMAND};
use crate::spawner::SessionSpawner;

/// Outcome of one project launch.
#[derive(Debug)]
pub struct LaunchReport {
    pub slug: String,
    pub working_dir: PathBuf,
    /// Sessions that were started, in order.
    pub issued: Vec<SessionKind>,
    /// One [`LaunchError::LaunchStepFailed`] per session that did not start.
    pub failures: Vec<LaunchError>,
}

impl LaunchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn resolve_root(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// The sessions `project` asks for, in launch order. Pure: touches neither
/// the filesystem nor any process.
pub fn plan(project: &Project) -> Vec<SessionRequest> {
    let slug = project.slug.as_str();
    let dir = resolve_root(&project.root_path);
    let mut requests = Vec::with_capacity(3);

    if project.has_startup_command() {
        requests.push(SessionRequest::new(
            SessionKind::Startup,
            slug,
            &project.startup_commands,
            dir.clone(),
        ));
    }
    if project.run_nvim {
        requests.push(SessionRequest::new(
            SessionKind::Editor,
            slug,
            EDITOR_COMMAND,
            dir.clone(),
        ));
    }
    if project.run_docker {
        requests.push(SessionRequest::new(
            SessionKind::Compose,
            slug,
            COMPOSE_COMMAND,
            dir,
        ));
    }
    requests
}

/// Launch every session of `project` through `spawner`.
///
/// Returns `LaunchError::InvalidRootPath` without requesting anything when
/// the root directory is missing. Otherwise always returns a report; spawn
/// failures are collected in [`LaunchReport::failures`].
pub fn launch<S>(project: &Project, spawner: &mut S) -> Result<LaunchReport, LaunchError>
where
    S: SessionSpawner + ?Sized,
{
    let slug = project.slug.to_string();
    let working_dir = resolve_root(&project.root_path);
    if !working_dir.is_dir() {
        return Err(LaunchError::InvalidRootPath {
            slug,
            path: working_dir,
        });
    }

    let mut report = LaunchReport {
        slug,
        working_dir,
        issued: Vec::new(),
        failures: Vec::new(),
    };

    for request in plan(project) {
        match spawner.spawn(&request) {
            Ok(()) => {
                tracing::info!(slug = %report.slug, step = %request.kind, command = %request.command, "session started");
                report.issued.push(request.kind);
            }
            Err(source) => {
                tracing::warn!(slug = %report.slug, step = %request.kind, error = %source, "session failed to start");
                report.failures.push(LaunchError::LaunchStepFailed {
                    slug: report.slug.clone(),
                    step: request.kind,
                    source,
                });
            }
        }
    }

    Ok(report)
}
