//! The process-spawn capability.
//!
//! A [`SessionSpawner`] starts one terminal session per request and returns
//! as soon as the session process exists. It never waits for the session to
//! exit; what happens inside the session afterwards is not its concern.

use std::process::{Command, Stdio};

use crate::error::SpawnError;
use crate::session::SessionRequest;

/// Runs `$1` through the shell, then keeps the session open in `$2`.
const SESSION_SCRIPT: &str = r#"eval "$1" && exec "$2""#;

pub trait SessionSpawner {
    /// Start the session described by `request`.
    fn spawn(&mut self, request: &SessionRequest) -> Result<(), SpawnError>;
}

impl<S: SessionSpawner + ?Sized> SessionSpawner for &mut S {
    fn spawn(&mut self, request: &SessionRequest) -> Result<(), SpawnError> {
        (**self).spawn(request)
    }
}

/// How to invoke the terminal emulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSettings {
    /// Terminal emulator executable, e.g. `alacritty`.
    pub program: String,
    /// Flag preceding the window title.
    pub title_flag: String,
    /// Flag preceding the argv the terminal should execute.
    pub exec_flag: String,
    /// Interactive shell left running after the command succeeds.
    pub shell: String,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            program: "alacritty".to_string(),
            title_flag: "-T".to_string(),
            exec_flag: "-e".to_string(),
            shell: "zsh".to_string(),
        }
    }
}

/// Opens each session in a new terminal emulator window.
#[derive(Debug, Clone, Default)]
pub struct TerminalSpawner {
    settings: TerminalSettings,
}

impl TerminalSpawner {
    pub fn new(settings: TerminalSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TerminalSettings {
        &self.settings
    }

    /// Build the terminal invocation for `request`.
    ///
    /// Title and command travel as discrete argv entries; nothing is
    /// interpolated into an outer shell string.
    pub fn command_for(&self, request: &SessionRequest) -> Command {
        let s = &self.settings;
        let mut cmd = Command::new(&s.program);
        if !s.title_flag.is_empty() {
            cmd.arg(&s.title_flag).arg(&request.title);
        }
        if !s.exec_flag.is_empty() {
            cmd.arg(&s.exec_flag);
        }
        cmd.args(["sh", "-c", SESSION_SCRIPT, "sh"])
            .arg(&request.command)
            .arg(&s.shell)
            .current_dir(&request.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl SessionSpawner for TerminalSpawner {
    fn spawn(&mut self, request: &SessionRequest) -> Result<(), SpawnError> {
        if self.settings.program.trim().is_empty() {
            return Err(SpawnError::Rejected(
                "no terminal emulator configured".to_string(),
            ));
        }

        let child = self
            .command_for(request)
            .spawn()
            .map_err(|source| SpawnError::Io {
                program: self.settings.program.clone(),
                source,
            })?;
        tracing::debug!(pid = child.id(), title = %request.title, "terminal session started");
        // Fire-and-forget: the child handle is dropped without waiting.
        drop(child);
        Ok(())
    }
}
