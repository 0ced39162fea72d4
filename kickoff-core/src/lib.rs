//! kickoff core library — project model, registry persistence, errors.
//!
//! - [`types`] — [`Slug`], [`Project`], [`Registry`]
//! - [`registration`] — validated inserts
//! - [`store`] — load / save of the registry file
//! - [`error`] — [`RegistryError`]

pub mod error;
pub mod registration;
pub mod store;
pub mod types;

pub use error::RegistryError;
pub use registration::{register, validate_slug, ProjectDraft, DEFAULT_STARTUP_COMMAND};
pub use types::{Project, Registry, Slug};
