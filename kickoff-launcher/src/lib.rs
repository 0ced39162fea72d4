//! Launches a project's terminal sessions.
//!
//! [`plan`] turns a [`kickoff_core::Project`] into ordered
//! [`SessionRequest`]s; [`launch`] issues them through a [`SessionSpawner`]
//! without waiting for any session to exit.

mod error;
pub mod launcher;
pub mod session;
pub mod spawner;

pub use error::{LaunchError, SpawnError};
pub use launcher::{launch, plan, resolve_root, LaunchReport};
pub use session::{SessionKind, SessionRequest, COMPOSE_COMMAND, EDITOR_COMMAND};
pub use spawner::{SessionSpawner, TerminalSettings, TerminalSpawner};
