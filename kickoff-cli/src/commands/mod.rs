pub mod projects;
pub mod run;

use std::path::PathBuf;

use kickoff_core::Registry;

/// The registry loaded for this invocation and where it is persisted.
#[derive(Debug)]
pub struct Workspace {
    pub registry_path: PathBuf,
    pub registry: Registry,
}

impl Workspace {
    pub fn new(registry_path: PathBuf, registry: Registry) -> Self {
        Self {
            registry_path,
            registry,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use kickoff_core::{Project, Slug};
    use kickoff_launcher::{SessionRequest, SessionSpawner, SpawnError};

    /// Records every request it is asked to start.
    #[derive(Default)]
    pub struct RecordingSpawner {
        pub requests: Vec<SessionRequest>,
    }

    impl SessionSpawner for RecordingSpawner {
        fn spawn(&mut self, request: &SessionRequest) -> Result<(), SpawnError> {
            self.requests.push(request.clone());
            Ok(())
        }
    }

    pub fn project(slug: &str, root: &Path, startup: &str, nvim: bool, docker: bool) -> Project {
        Project {
            root_path: root.to_path_buf(),
            slug: Slug::from(slug),
            run_docker: docker,
            run_nvim: nvim,
            startup_commands: startup.to_string(),
        }
    }
}
