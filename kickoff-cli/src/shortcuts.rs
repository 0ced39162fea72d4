//! Registry-derived command surface.
//!
//! Every registered slug becomes a top-level subcommand that behaves like
//! `run <slug>`. The table is rebuilt from the registry on each invocation.

use clap::{ArgMatches, Command, CommandFactory};
use kickoff_core::Registry;

use crate::Cli;

/// Built-in subcommand names a slug may not shadow.
pub const RESERVED_NAMES: &[&str] = &["projects", "run", "help"];

/// Whether `slug` can be exposed as its own subcommand.
pub fn is_shortcut_name(slug: &str) -> bool {
    !RESERVED_NAMES.contains(&slug)
        && !slug.starts_with('-')
        && !slug.chars().any(char::is_whitespace)
}

/// The static CLI plus one shortcut subcommand per eligible project.
pub fn build_command(registry: &Registry) -> Command {
    let mut cmd = Cli::command();
    for slug in registry.slugs() {
        if !is_shortcut_name(slug.as_str()) {
            tracing::warn!(%slug, "slug cannot be used as a shortcut; use `kickoff run {slug}`");
            continue;
        }
        cmd = cmd.subcommand(
            Command::new(slug.to_string()).about(format!("Shortcut to start {slug}")),
        );
    }
    cmd
}

/// The slug of the shortcut that was invoked, if any.
pub fn shortcut_slug<'a>(matches: &'a ArgMatches, registry: &Registry) -> Option<&'a str> {
    let (name, _) = matches.subcommand()?;
    (is_shortcut_name(name) && registry.contains(name)).then_some(name)
}
