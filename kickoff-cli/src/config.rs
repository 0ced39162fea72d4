//! Runtime configuration, read from the environment once at startup.

use std::path::PathBuf;

use anyhow::Result;
use kickoff_core::store;
use kickoff_launcher::TerminalSettings;

pub const ENV_REGISTRY: &str = "KICKOFF_REGISTRY";
pub const ENV_TERMINAL: &str = "KICKOFF_TERMINAL";
pub const ENV_TITLE_FLAG: &str = "KICKOFF_TERMINAL_TITLE_FLAG";
pub const ENV_EXEC_FLAG: &str = "KICKOFF_TERMINAL_EXEC_FLAG";
pub const ENV_SHELL: &str = "KICKOFF_SHELL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of `projects.json`.
    pub registry_path: PathBuf,
    pub terminal: TerminalSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let registry_path = match get(ENV_REGISTRY) {
            Some(path) => PathBuf::from(path),
            None => store::default_registry_path()?,
        };

        let defaults = TerminalSettings::default();
        let terminal = TerminalSettings {
            program: get(ENV_TERMINAL).unwrap_or(defaults.program),
            title_flag: get(ENV_TITLE_FLAG).unwrap_or(defaults.title_flag),
            exec_flag: get(ENV_EXEC_FLAG).unwrap_or(defaults.exec_flag),
            shell: get(ENV_SHELL)
                .or_else(|| get("SHELL"))
                .unwrap_or(defaults.shell),
        };

        Ok(Self {
            registry_path,
            terminal,
        })
    }
}
