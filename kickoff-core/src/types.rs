//! Domain types for the kickoff registry.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! The on-disk shape uses the camelCase keys of the registry file.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed project identifier. Doubles as a shortcut command name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(pub String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A registered project: where it lives and what to start for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Working directory of every launched session. Not required to exist
    /// until launch time.
    pub root_path: PathBuf,
    pub slug: Slug,
    #[serde(default)]
    pub run_docker: bool,
    #[serde(default)]
    pub run_nvim: bool,
    /// Shell command line for the startup session. Empty means none.
    #[serde(default)]
    pub startup_commands: String,
}

impl Project {
    /// Whether a startup session should be opened for this project.
    pub fn has_startup_command(&self) -> bool {
        !self.startup_commands.is_empty()
    }
}

/// Ordered collection of projects, persisted as a bare JSON array.
///
/// Invariant: slugs are unique. [`Registry::add`] trusts its caller on this;
/// go through [`crate::registration::register`] for validated inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Registry {
    projects: Vec<Project>,
}

impl Registry {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Slugs in stored order.
    pub fn slugs(&self) -> impl Iterator<Item = &Slug> {
        self.projects.iter().map(|p| &p.slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.find(slug).is_some()
    }

    /// Exact-match lookup.
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == *slug)
    }

    /// Append without re-checking slug uniqueness.
    pub fn add(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Remove the entry for `slug`, leaving the sequence untouched if absent.
    pub fn remove(&mut self, slug: &str) -> Result<Project, RegistryError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.slug == *slug)
            .ok_or_else(|| RegistryError::NotFound {
                slug: slug.to_owned(),
            })?;
        Ok(self.projects.remove(index))
    }

    /// First slug that appears more than once, if any.
    pub(crate) fn first_duplicate(&self) -> Option<&Slug> {
        let mut seen = std::collections::HashSet::new();
        for slug in self.slugs() {
            if !seen.insert(slug.as_str()) {
                return Some(slug);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str) -> Project {
        Project {
            root_path: PathBuf::from(format!("/code/{slug}")),
            slug: Slug::from(slug),
            run_docker: false,
            run_nvim: true,
            startup_commands: String::new(),
        }
    }

    #[test]
    fn slug_display() {
        assert_eq!(Slug::from("api").to_string(), "api");
    }

    #[test]
    fn project_uses_camel_case_keys() {
        let json = serde_json::to_value(project("api")).expect("serialize");
        assert_eq!(json["rootPath"], "/code/api");
        assert_eq!(json["runNvim"], true);
        assert_eq!(json["runDocker"], false);
        assert_eq!(json["startupCommands"], "");
    }

    #[test]
    fn registry_serializes_as_bare_array() {
        let reg = Registry::new(vec![project("api")]);
        let json = serde_json::to_value(&reg).expect("serialize");
        assert!(json.is_array());
        assert_eq!(json[0]["slug"], "api");
    }

    #[test]
    fn remove_absent_slug_leaves_registry_unchanged() {
        let mut reg = Registry::new(vec![project("api"), project("web")]);
        let before = reg.clone();
        let err = reg.remove("nope").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert_eq!(reg, before);
    }

    #[test]
    fn empty_startup_command_is_not_a_startup_session() {
        let mut p = project("api");
        assert!(!p.has_startup_command());
        p.startup_commands = "make dev".to_string();
        assert!(p.has_startup_command());
    }

    #[test]
    fn first_duplicate_detects_repeated_slug() {
        let reg = Registry::new(vec![project("api"), project("web"), project("api")]);
        assert_eq!(reg.first_duplicate(), Some(&Slug::from("api")));
        assert_eq!(Registry::new(vec![project("api")]).first_duplicate(), None);
    }
}
