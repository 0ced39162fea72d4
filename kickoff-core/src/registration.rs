//! Validation and defaulting for projects entering the registry.

use std::path::PathBuf;

use crate::error::RegistryError;
use crate::types::{Project, Registry, Slug};

/// Startup command offered when the operator does not supply one.
pub const DEFAULT_STARTUP_COMMAND: &str = "echo 'Project is getting started'";

/// A project as collected from the operator, before it is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub root_path: PathBuf,
    pub slug: String,
    pub run_docker: bool,
    pub run_nvim: bool,
    /// `None` falls back to [`DEFAULT_STARTUP_COMMAND`]; `Some("")` means no
    /// startup session.
    pub startup_commands: Option<String>,
}

impl ProjectDraft {
    /// Build the [`Project`] without checking it against any registry.
    pub fn into_project(self) -> Project {
        Project {
            root_path: self.root_path,
            slug: Slug::from(self.slug.trim()),
            run_docker: self.run_docker,
            run_nvim: self.run_nvim,
            startup_commands: self
                .startup_commands
                .unwrap_or_else(|| DEFAULT_STARTUP_COMMAND.to_string()),
        }
    }
}

/// Check a candidate slug against `registry`.
///
/// Surrounding whitespace is ignored. Empty and already-registered slugs
/// are rejected.
pub fn validate_slug(registry: &Registry, candidate: &str) -> Result<Slug, RegistryError> {
    let slug = candidate.trim();
    if slug.is_empty() {
        return Err(RegistryError::EmptySlug);
    }
    if registry.contains(slug) {
        return Err(RegistryError::DuplicateSlug {
            slug: slug.to_owned(),
        });
    }
    Ok(Slug::from(slug))
}

/// Validate `draft` and append it to `registry`.
///
/// On error the registry is left unchanged. The caller persists the result.
/// Returns the registered slug.
pub fn register(registry: &mut Registry, draft: ProjectDraft) -> Result<Slug, RegistryError> {
    let slug = validate_slug(registry, &draft.slug)?;
    if draft.root_path.as_os_str().is_empty() {
        return Err(RegistryError::EmptyRootPath {
            slug: slug.to_string(),
        });
    }

    registry.add(Project {
        slug: slug.clone(),
        ..draft.into_project()
    });
    tracing::debug!(%slug, "project registered");
    Ok(slug)
}
