use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionKind;

/// The process-spawn capability could not start a session.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to start `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Rejected(String),
}

/// Failures surfaced by [`crate::launch`].
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Fatal for the whole project: no session is requested.
    #[error("cannot launch {slug}: root path {} does not exist or is not a directory", path.display())]
    InvalidRootPath { slug: String, path: PathBuf },

    /// One session failed to start. Later steps still run.
    #[error("{step} session for {slug} failed to start: {source}")]
    LaunchStepFailed {
        slug: String,
        step: SessionKind,
        #[source]
        source: SpawnError,
    },
}
