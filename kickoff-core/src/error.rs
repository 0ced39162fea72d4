//! Error types for kickoff-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry file exists but could not be read.
    #[error("failed to read registry at {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not a JSON array of projects.
    #[error("registry at {path} is corrupt: {source}")]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the registry failed (permissions, disk full, missing parent).
    #[error("failed to write registry at {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the in-memory registry failed.
    #[error("failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No project carries the requested slug.
    #[error("Project with slug {slug} not found.")]
    NotFound { slug: String },

    /// A project with this slug is already registered.
    #[error("Slug {slug} already exists. Please choose another.")]
    DuplicateSlug { slug: String },

    /// Slugs must contain at least one non-whitespace character.
    #[error("slug must not be empty")]
    EmptySlug,

    /// Root paths must be non-empty.
    #[error("root path for {slug} must not be empty")]
    EmptyRootPath { slug: String },

    /// The running executable's directory could not be determined.
    #[error("cannot determine the installation directory: {0}")]
    InstallDirNotFound(#[source] std::io::Error),
}
