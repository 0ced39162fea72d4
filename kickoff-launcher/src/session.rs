//! Session-launch requests.

use std::fmt;
use std::path::PathBuf;

/// Command run in the editor session.
pub const EDITOR_COMMAND: &str = "nvim";

/// Command run in the container-stack session.
pub const COMPOSE_COMMAND: &str = "docker compose up";

/// The sessions a project can open, in launch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionKind {
    Startup,
    Editor,
    Compose,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Startup => write!(f, "startup"),
            SessionKind::Editor => write!(f, "editor"),
            SessionKind::Compose => write!(f, "compose"),
        }
    }
}

/// One new interactive terminal session running `command` in `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub kind: SessionKind,
    pub title: String,
    pub command: String,
    pub working_dir: PathBuf,
}

impl SessionRequest {
    pub fn new(kind: SessionKind, slug: &str, command: &str, working_dir: PathBuf) -> Self {
        Self {
            kind,
            title: session_title(slug, command),
            command: command.to_owned(),
            working_dir,
        }
    }
}

/// `Workspace - <slug>: <command>`
pub fn session_title(slug: &str, command: &str) -> String {
    format!("Workspace - {slug}: {command}")
}
