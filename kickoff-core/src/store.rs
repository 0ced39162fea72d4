//! JSON registry file.
//!
//! # Storage layout
//!
//! ```text
//! <install dir>/
//!   kickoff            (binary)
//!   projects.json      (registry — a JSON array of projects)
//! ```
//!
//! # API pattern
//!
//! Storage functions take the registry path explicitly (`load_at`, `save_at`).
//! [`default_registry_path`] resolves the installed location; tests always
//! point at a `TempDir`.

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::types::Registry;

pub const REGISTRY_FILE_NAME: &str = "projects.json";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `projects.json` beside the running executable.
pub fn default_registry_path() -> Result<PathBuf, RegistryError> {
    let exe = std::env::current_exe().map_err(RegistryError::InstallDirNotFound)?;
    let dir = exe.parent().ok_or_else(|| {
        RegistryError::InstallDirNotFound(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;
    Ok(dir.join(REGISTRY_FILE_NAME))
}

/// Sibling used for the write-then-rename save.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| REGISTRY_FILE_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load the registry at `path`.
///
/// A missing file is initialized to `[]` on disk and an empty registry is
/// returned. Unparseable content yields `RegistryError::StorageCorrupt`; a
/// file holding the same slug twice yields `RegistryError::DuplicateSlug`.
pub fn load_at(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "registry missing, initializing empty");
        let registry = Registry::default();
        save_at(path, &registry)?;
        return Ok(registry);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::StorageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let registry: Registry =
        serde_json::from_str(&contents).map_err(|source| RegistryError::StorageCorrupt {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(slug) = registry.first_duplicate() {
        return Err(RegistryError::DuplicateSlug {
            slug: slug.to_string(),
        });
    }

    tracing::debug!(path = %path.display(), projects = registry.len(), "registry loaded");
    Ok(registry)
}

// ---------------------------------------------------------------------------
// 3. Save (whole-file overwrite)
// ---------------------------------------------------------------------------

/// Overwrite the registry at `path` with `registry`.
///
/// Write flow: serialize → `.tmp` sibling → `rename`. The `.tmp` file lives
/// in the target's directory so the rename never crosses filesystems.
pub fn save_at(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    let write_err = |source| RegistryError::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut json = serde_json::to_string_pretty(registry).map_err(RegistryError::Serialize)?;
    json.push('\n');

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, json).map_err(write_err)?;
    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(err));
    }

    tracing::debug!(path = %path.display(), projects = registry.len(), "registry saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
